//! The variant composer: assembles N distinct candidate captions (and
//! bio lines and reel scripts) for one structured input.
//!
//! All selection is rotation-indexed and fully deterministic: identical
//! input produces identical output, and outputs only diverge across the
//! variant index.

pub mod rotation;
pub mod text;
pub mod hashtags;

use chrono::Utc;
use thiserror::Error;

use crate::catalog::{Fragment, TemplateCatalog};
use crate::types::{ContentInput, GeneratedVariant, ReelScript, VariantId};

pub use hashtags::assemble_hashtags;
pub use rotation::{rotate, slot_offset};
pub use text::{fill_placeholders, strip_emoji_tokens};

#[derive(Debug, Error)]
pub enum ComposeError {
    /// Caller-contract violation: callers must validate the theme
    /// before composing.
    #[error("theme must not be blank")]
    EmptyTheme,
    /// Catalog misconfiguration: a filtered pool came back empty. The
    /// builtin catalog always has at least one fragment per slot, so
    /// this indicates a broken substitute catalog.
    #[error("no fragments available for slot: {0}")]
    EmptyPool(&'static str),
}

pub struct VariantComposer {
    catalog: TemplateCatalog,
}

impl Default for VariantComposer {
    fn default() -> Self {
        Self { catalog: TemplateCatalog::builtin() }
    }
}

impl VariantComposer {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Compose `count` candidate captions.
    ///
    /// Variant `i` never repeats the fragment tuple of variant `j` as
    /// long as every filtered pool holds at least `count` fragments;
    /// smaller pools cycle instead of erroring. `count == 0` returns an
    /// empty vector.
    pub fn compose(
        &self,
        input: &ContentInput,
        count: usize,
    ) -> Result<Vec<GeneratedVariant>, ComposeError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if input.theme_is_blank() {
            return Err(ComposeError::EmptyTheme);
        }

        // 1. Filter pools by the input's hook type / genre / action.
        let hooks = self.catalog.hooks_for(input.hook_type, input.genre);
        let stories = self.catalog.stories_for(input.genre);
        let values = self.catalog.values_for(input.genre);
        let ctas = self.catalog.ctas_for(input.target_action, input.genre);

        if hooks.is_empty() {
            return Err(ComposeError::EmptyPool("hook"));
        }
        if stories.is_empty() {
            return Err(ComposeError::EmptyPool("story"));
        }
        if values.is_empty() {
            return Err(ComposeError::EmptyPool("value"));
        }
        if ctas.is_empty() {
            return Err(ComposeError::EmptyPool("cta"));
        }

        // 2. Slot offsets depend only on the input, computed once.
        let hook_offset = slot_offset(input, "hook");
        let story_offset = slot_offset(input, "story");
        let value_offset = slot_offset(input, "value");
        let cta_offset = slot_offset(input, "cta");

        // 3. The hashtag block is a pure function of the input.
        let tags = assemble_hashtags(&self.catalog, input);
        let tag_block = tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");

        let theme = input.theme.trim();
        let nouns = self.catalog.nouns(input.genre);

        // 4. Assemble each variant.
        let mut variants = Vec::with_capacity(count);
        for index in 0..count {
            let hook_frag = hooks[rotate(hook_offset, index, hooks.len())];
            let story_frag = stories[rotate(story_offset, index, stories.len())];
            let value_frag = values[rotate(value_offset, index, values.len())];
            let cta_frag = ctas[rotate(cta_offset, index, ctas.len())];

            // Keyword round-robin is shared across the variant's slots
            // and starts at the variant index so substitution rotates
            // alongside fragment choice.
            let mut counter = index;
            let mut render = |frag: &Fragment| -> String {
                let surface = if input.include_emoji {
                    frag.text.to_string()
                } else {
                    strip_emoji_tokens(frag.text)
                };
                fill_placeholders(&surface, theme, &input.keywords, nouns, &mut counter)
            };

            let hook = render(hook_frag);
            let story = render(story_frag);
            let value = render(value_frag);
            let cta = render(cta_frag);

            let full_caption = format!("{hook}\n\n{story}\n\n{value}\n\n{cta}\n\n{tag_block}");

            variants.push(GeneratedVariant {
                id: VariantId::derive(input, index),
                hook,
                story,
                value,
                cta,
                full_caption,
                hashtags: tags.clone(),
                hook_reason: hook_frag.reason.to_string(),
                cta_reason: cta_frag.reason.to_string(),
                input: input.clone(),
                created_at: Utc::now(),
            });
        }

        debug_assert!(
            {
                let mut ids: Vec<&str> = variants.iter().map(|v| v.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "variant ids must be unique within a call"
        );

        Ok(variants)
    }

    /// Compose `count` bio line candidates from the bio pool. Same
    /// determinism and validation contract as [`compose`](Self::compose).
    pub fn compose_bio(
        &self,
        input: &ContentInput,
        count: usize,
    ) -> Result<Vec<String>, ComposeError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if input.theme_is_blank() {
            return Err(ComposeError::EmptyTheme);
        }

        let pool: Vec<&Fragment> = self
            .catalog
            .bios
            .iter()
            .filter(|f| f.applies_to(input.genre))
            .collect();
        if pool.is_empty() {
            return Err(ComposeError::EmptyPool("bio"));
        }

        let offset = slot_offset(input, "bio");
        let theme = input.theme.trim();
        let nouns = self.catalog.nouns(input.genre);

        let mut bios = Vec::with_capacity(count);
        for index in 0..count {
            let frag = pool[rotate(offset, index, pool.len())];
            let surface = if input.include_emoji {
                frag.text.to_string()
            } else {
                strip_emoji_tokens(frag.text)
            };
            let mut counter = index;
            bios.push(fill_placeholders(
                &surface,
                theme,
                &input.keywords,
                nouns,
                &mut counter,
            ));
        }

        Ok(bios)
    }

    /// Compose `count` reel scripts from the four reel section pools.
    pub fn compose_reel_script(
        &self,
        input: &ContentInput,
        count: usize,
    ) -> Result<Vec<ReelScript>, ComposeError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if input.theme_is_blank() {
            return Err(ComposeError::EmptyTheme);
        }

        let pools: [(&'static str, &[Fragment]); 4] = [
            ("reel.hook", self.catalog.reel_hooks),
            ("reel.broll", self.catalog.reel_brolls),
            ("reel.on_screen", self.catalog.reel_on_screen),
            ("reel.cta", self.catalog.reel_ctas),
        ];
        for (slot, pool) in pools {
            if pool.is_empty() {
                return Err(ComposeError::EmptyPool(slot));
            }
        }

        let offsets: Vec<usize> = pools
            .iter()
            .map(|(slot, _)| slot_offset(input, slot))
            .collect();

        let theme = input.theme.trim();
        let nouns = self.catalog.nouns(input.genre);

        let mut scripts = Vec::with_capacity(count);
        for index in 0..count {
            let mut counter = index;
            let mut render = |pool_idx: usize| -> String {
                let (_, pool) = pools[pool_idx];
                let frag = &pool[rotate(offsets[pool_idx], index, pool.len())];
                let surface = if input.include_emoji {
                    frag.text.to_string()
                } else {
                    strip_emoji_tokens(frag.text)
                };
                fill_placeholders(&surface, theme, &input.keywords, nouns, &mut counter)
            };

            scripts.push(ReelScript {
                hook_line: render(0),
                broll_beat: render(1),
                on_screen_text: render(2),
                cta_line: render(3),
            });
        }

        Ok(scripts)
    }
}
