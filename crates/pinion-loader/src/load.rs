//! Profile folder loading

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pinion_core::{PinAddress, PinionError, PinionResult, Token};
use pinion_state::{DeviceProfile, ProfileDirectory, Widget};

use crate::format::ProfileFile;

/// Load every `*.json` profile under `dir` and build the directory.
///
/// Fails on the first unreadable or invalid profile: a partially
/// loaded directory must never start serving.
pub fn load_dir(dir: &Path) -> PinionResult<ProfileDirectory> {
    let entries = fs::read_dir(dir)
        .map_err(|e| PinionError::ProfileRead(format!("{}: {e}", dir.display())))?;

    let mut profiles: HashMap<Token, DeviceProfile> = HashMap::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| PinionError::ProfileRead(format!("{}: {e}", dir.display())))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let (token, profile) = load_file(&path)?;
        tracing::info!(file = %path.display(), widgets = profile.len(), "profile loaded");
        if profiles.insert(token, profile).is_some() {
            return Err(PinionError::DuplicateToken);
        }
    }

    Ok(ProfileDirectory::from_profiles(profiles))
}

/// Load a single profile file
pub fn load_file(path: &Path) -> PinionResult<(Token, DeviceProfile)> {
    let raw = fs::read_to_string(path)
        .map_err(|e| PinionError::ProfileRead(format!("{}: {e}", path.display())))?;
    let file: ProfileFile = serde_json::from_str(&raw)
        .map_err(|e| PinionError::ProfileParse(format!("{}: {e}", path.display())))?;
    build_profile(file)
}

/// Build serving state from a parsed profile file
pub fn build_profile(file: ProfileFile) -> PinionResult<(Token, DeviceProfile)> {
    let mut widgets = Vec::with_capacity(file.widgets.len());
    for entry in file.widgets {
        let pin = entry
            .pin
            .as_deref()
            .map(PinAddress::parse)
            .transpose()?;
        widgets.push(Widget::with_values(entry.name, pin, entry.values));
    }

    let profile = DeviceProfile::new(widgets)?;
    Ok((Token::new(file.token), profile))
}
