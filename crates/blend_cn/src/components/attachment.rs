//! Files attached to a chat input

use indexmap::IndexMap;

/// Coarse file type, used to pick a chip icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Image,
    Pdf,
    Text,
    Csv,
    Other,
}

impl AttachmentKind {
    /// Infer the kind from a file name's extension (case-insensitive)
    pub fn from_file_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return AttachmentKind::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" => AttachmentKind::Image,
            "pdf" => AttachmentKind::Pdf,
            "txt" | "md" | "log" | "json" => AttachmentKind::Text,
            "csv" | "tsv" => AttachmentKind::Csv,
            _ => AttachmentKind::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::Pdf => "pdf",
            AttachmentKind::Text => "text",
            AttachmentKind::Csv => "csv",
            AttachmentKind::Other => "other",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttachedFile {
    pub id: String,
    pub name: String,
    pub kind: AttachmentKind,
    /// Size in bytes, when known
    pub size: Option<u64>,
}

impl AttachedFile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            kind: AttachmentKind::from_file_name(&name),
            name,
            size: None,
        }
    }

    pub fn with_size(mut self, bytes: u64) -> Self {
        self.size = Some(bytes);
        self
    }

    pub fn size_label(&self) -> Option<String> {
        self.size.map(file_size_label)
    }
}

/// Human-readable size: bytes below 1 KB, then KB and MB with one decimal
pub fn file_size_label(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Insertion-ordered attachments, unique by id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttachmentList {
    files: IndexMap<String, AttachedFile>,
}

impl AttachmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file. Returns false if a file with the same id is present.
    pub fn add(&mut self, file: AttachedFile) -> bool {
        if self.files.contains_key(&file.id) {
            return false;
        }
        self.files.insert(file.id.clone(), file);
        true
    }

    /// Remove a file by id, keeping the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<AttachedFile> {
        self.files.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&AttachedFile> {
        self.files.get(id)
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttachedFile> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
