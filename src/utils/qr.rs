use crate::utils::files::{sanitize_filename, write_atomic};
use anyhow::Context;
use qrcode_generator::QrCodeEcc;
use std::path::{Path, PathBuf};

const QR_SIZE_PX: usize = 256;

/// Artifact name derived from the employee's display name and assigned
/// id: lowercased, spaces to underscores, then sanitized. The id keeps
/// the name unique; the prefix only makes the file human-findable.
pub fn artifact_filename(name: &str, id: i64) -> String {
    let safe = sanitize_filename(&name.to_lowercase().replace(' ', "_"));
    format!("{safe}_{id}.png")
}

/// Render the employee id as a QR PNG under `dir`. The content is the
/// decimal id as text, which is what the scan client posts back; the
/// artifact is generated once at creation time and never refreshed.
pub fn generate_artifact(dir: &Path, name: &str, id: i64) -> anyhow::Result<PathBuf> {
    let png = qrcode_generator::to_png_to_vec(id.to_string(), QrCodeEcc::Medium, QR_SIZE_PX)
        .map_err(|e| anyhow::anyhow!("QR encode failed: {e}"))?;

    let path = dir.join(artifact_filename(name, id));
    write_atomic(&path, &png).with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}
