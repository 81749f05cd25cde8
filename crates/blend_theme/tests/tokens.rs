use blend_core::Color;
use blend_theme::{
    get_tokens, Breakpoint, ButtonSize, ButtonState, ButtonSubType, ButtonTokens, ButtonType,
    ChatInputState, ChatInputTokens, ColorScheme, FoundationTokens, TagColor, TagShape, TagSize,
    TagTokens, TagVariant, TokenKey, TokenRegistry,
};

const SCHEMES: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

fn assert_color(c: Color, context: &str) {
    for channel in c.to_array() {
        assert!(
            channel.is_finite() && (0.0..=1.0).contains(&channel),
            "bad color channel {channel} at {context}"
        );
    }
}

fn assert_px(v: f32, context: &str) {
    assert!(v.is_finite() && v >= 0.0, "bad length {v} at {context}");
}

#[test]
fn tag_tables_are_total() {
    let registry = TokenRegistry::default();
    for scheme in SCHEMES {
        for bp in Breakpoint::ALL {
            let tag = registry.resolve_tag(scheme, bp);
            for &variant in TagVariant::ALL {
                for &color in TagColor::ALL {
                    let ctx = format!("{scheme}/{bp}/{variant}/{color}");
                    assert_color(tag.background(variant, color), &ctx);
                    assert_color(tag.text_color(variant, color), &ctx);
                    assert_color(tag.border(variant, color), &ctx);
                }
                assert_px(tag.border_width[variant], &variant.to_string());
            }
            for &size in TagSize::ALL {
                for &shape in TagShape::ALL {
                    assert_px(tag.radius(shape, size), &format!("{shape}/{size}"));
                }
                let ctx = format!("{scheme}/{bp}/{size}");
                assert_px(tag.padding[size].x, &ctx);
                assert_px(tag.padding[size].y, &ctx);
                assert_px(tag.height[size], &ctx);
                assert_px(tag.font_size[size], &ctx);
                assert!(tag.font_weight[size] >= 100);
            }
        }
    }
}

#[test]
fn button_tables_are_total() {
    let registry = TokenRegistry::default();
    for scheme in SCHEMES {
        for bp in Breakpoint::ALL {
            let button = registry.resolve_button(scheme, bp);
            for &ty in ButtonType::ALL {
                for &sub in ButtonSubType::ALL {
                    for &state in ButtonState::ALL {
                        let ctx = format!("{scheme}/{bp}/{ty}/{sub}/{state}");
                        assert_color(button.background(ty, sub, state), &ctx);
                        assert_color(button.text_color(ty, sub, state), &ctx);
                        assert_color(button.border(ty, sub, state), &ctx);
                    }
                }
            }
            for &size in ButtonSize::ALL {
                assert_px(button.border_radius[size], size.as_str());
                assert_px(button.font_size[size], size.as_str());
                for &sub in ButtonSubType::ALL {
                    assert_px(button.padding[size][sub].x, sub.as_str());
                }
            }
        }
    }
}

#[test]
fn chat_input_tables_are_total() {
    let registry = TokenRegistry::default();
    for scheme in SCHEMES {
        for bp in Breakpoint::ALL {
            let chat = registry.resolve_chat_input(scheme, bp);
            for &state in ChatInputState::ALL {
                let ctx = format!("{scheme}/{bp}/{state}");
                assert_color(chat.container.background_color[state], &ctx);
                assert_color(chat.container.border_color[state], &ctx);
                assert_color(chat.text.color[state], &ctx);
            }
            assert!(chat.overflow.more_trigger_width > 0.0);
            assert_px(chat.overflow.gap, "overflow.gap");
            assert_px(chat.overflow.buffer, "overflow.buffer");
        }
    }
}

#[test]
fn serialized_tables_cover_every_variant_key() {
    let tag = TokenRegistry::shared().resolve_tag(ColorScheme::Light, Breakpoint::Sm);
    let json = serde_json::to_value(tag).unwrap();
    let backgrounds = json["background_color"].as_object().unwrap();
    assert_eq!(backgrounds.len(), TagVariant::ALL.len());
    for &variant in TagVariant::ALL {
        let per_color = backgrounds[variant.as_str()].as_object().unwrap();
        assert_eq!(per_color.len(), TagColor::ALL.len());
        for &color in TagColor::ALL {
            assert!(per_color[color.as_str()].is_string());
        }
    }
}

#[test]
fn resolution_is_deterministic() {
    let foundation = FoundationTokens::default();
    for theme in ["light", "dark"] {
        assert_eq!(
            get_tokens::<TagTokens>(&foundation, theme),
            get_tokens::<TagTokens>(&foundation, theme)
        );
        assert_eq!(
            get_tokens::<ButtonTokens>(&foundation, theme),
            get_tokens::<ButtonTokens>(&foundation, theme)
        );
    }
    assert_eq!(TokenRegistry::default(), TokenRegistry::default());
}

#[test]
fn unknown_theme_falls_back_to_light() {
    let foundation = FoundationTokens::default();
    let light = get_tokens::<ChatInputTokens>(&foundation, "light");
    for theme in ["", "sepia", "Light", "dark-blue"] {
        assert_eq!(get_tokens::<ChatInputTokens>(&foundation, theme), light, "{theme}");
    }
    assert_ne!(get_tokens::<ChatInputTokens>(&foundation, "dark"), light);
}

#[test]
fn shared_registry_matches_fresh_build() {
    let shared = TokenRegistry::shared();
    let fresh = TokenRegistry::default();
    assert_eq!(
        shared.tokens::<TagTokens>(ColorScheme::Dark),
        fresh.tokens::<TagTokens>(ColorScheme::Dark)
    );
    assert!(std::ptr::eq(shared, TokenRegistry::shared()));
}
