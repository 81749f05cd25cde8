//! Exhaustive variant tables
//!
//! A [`VariantTable`] maps every member of a closed key enum to a value. It
//! can only be built through [`VariantTable::from_fn`], so lookups never miss.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Index;

/// A closed set of keys used to index token tables
pub trait TokenKey: Copy + Eq + Hash + Debug + 'static {
    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// Position of this member in [`TokenKey::ALL`]
    fn index(self) -> usize;

    /// Stable key name used in serialized tables
    fn as_str(self) -> &'static str;
}

/// Declares a fieldless enum and implements [`TokenKey`] for it.
///
/// Each variant is paired with the name it serializes under.
macro_rules! token_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::variant::TokenKey for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::variant::TokenKey::as_str(*self))
            }
        }
    };
}

pub(crate) use token_key;

/// Total mapping from every `K` to a `V`
#[derive(Clone, Debug, PartialEq)]
pub struct VariantTable<K: TokenKey, V> {
    values: Vec<V>,
    _key: PhantomData<K>,
}

impl<K: TokenKey, V> VariantTable<K, V> {
    /// Build a table by calling `f` once for each key in declaration order
    pub fn from_fn(f: impl FnMut(K) -> V) -> Self {
        Self {
            values: K::ALL.iter().copied().map(f).collect(),
            _key: PhantomData,
        }
    }

    pub fn get(&self, key: K) -> &V {
        &self.values[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        K::ALL.iter().copied().zip(self.values.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(K, &V) -> U) -> VariantTable<K, U> {
        VariantTable::from_fn(|key| f(key, self.get(key)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: TokenKey, V: Clone> VariantTable<K, V> {
    /// Table with the same value under every key
    pub fn splat(value: V) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<K: TokenKey, V> Index<K> for VariantTable<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        self.get(key)
    }
}

impl<K: TokenKey, V: Serialize> Serialize for VariantTable<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
