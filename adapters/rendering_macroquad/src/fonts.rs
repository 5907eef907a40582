use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use dont_press_core::FontFamily;
use macroquad::text::{load_ttf_font_from_bytes, Font};
use tracing::{info, warn};

const SUPPORTED_MANIFEST_VERSION: u32 = 1;

/// Typefaces loaded from the font manifest, keyed by family.
///
/// Families without an entry are typeset in macroquad's built-in font.
#[derive(Debug, Default)]
pub(crate) struct FontAtlas {
    fonts: HashMap<FontFamily, Font>,
}

impl FontAtlas {
    /// Loads every typeface listed by the manifest at `path`.
    pub(crate) fn from_manifest_path(path: impl AsRef<Path>) -> Result<Self> {
        let manifest_path = path.as_ref();
        let contents = fs::read_to_string(manifest_path).with_context(|| {
            format!("failed to read font manifest at {}", manifest_path.display())
        })?;
        let base = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let entries = parse_manifest(&contents, &base)?;
        let fonts = load_entries(entries, default_loader)?;
        for family in FontFamily::ALL {
            if !fonts.contains_key(&family) {
                warn!(family = family.key(), "no typeface in manifest, using built-in font");
            }
        }
        info!(count = fonts.len(), "font atlas loaded");
        Ok(Self { fonts })
    }

    /// Loads the manifest when one is configured and it exists on disk.
    ///
    /// A missing manifest yields an empty atlas; a malformed one is an error.
    pub(crate) fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::from_manifest_path(path),
            Some(path) => {
                warn!(path = %path.display(), "font manifest not found, using built-in font");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Typeface for `family`, if the manifest provided one.
    #[must_use]
    pub(crate) fn font(&self, family: FontFamily) -> Option<Font> {
        self.fonts.get(&family).copied()
    }
}

fn default_loader(family: FontFamily, path: &Path) -> Result<Font> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read {} typeface at {}", family.key(), path.display()))?;
    load_ttf_font_from_bytes(&bytes)
        .map_err(|error| anyhow!("failed to decode {} typeface: {error:?}", family.key()))
}

fn load_entries<T>(
    entries: Vec<(FontFamily, PathBuf)>,
    mut loader: impl FnMut(FontFamily, &Path) -> Result<T>,
) -> Result<HashMap<FontFamily, T>> {
    let mut loaded = HashMap::with_capacity(entries.len());
    for (family, path) in entries {
        let font = loader(family, &path)?;
        if loaded.insert(family, font).is_some() {
            bail!("duplicate typeface entry for {}", family.key());
        }
    }
    Ok(loaded)
}

#[derive(Debug, serde::Deserialize)]
struct Manifest {
    version: u32,
    #[serde(default)]
    fonts: HashMap<String, String>,
}

fn parse_manifest(contents: &str, base_path: &Path) -> Result<Vec<(FontFamily, PathBuf)>> {
    let manifest: Manifest =
        toml::from_str(contents).context("failed to parse font manifest toml contents")?;
    if manifest.version != SUPPORTED_MANIFEST_VERSION {
        bail!(
            "unsupported font manifest version {}; expected {}",
            manifest.version,
            SUPPORTED_MANIFEST_VERSION
        );
    }

    let mut resolved = HashMap::new();
    for (name, relative_path) in manifest.fonts {
        let Some(family) = FontFamily::from_key(&name) else {
            bail!("unknown font family `{name}` in manifest");
        };
        let _ = resolved.insert(family, base_path.join(relative_path));
    }

    // Manifest tables are unordered; load in family order.
    Ok(FontFamily::ALL
        .into_iter()
        .filter_map(|family| resolved.remove(&family).map(|path| (family, path)))
        .collect())
}
