use std::{fs, path::Path};

use crate::{
    config::{tmp_path, write_atomic},
    errors::ForecastError,
    forecast::ForecastProfile,
};

/// Writes the profile to disk atomically by staging to a temporary file.
pub fn save_profile(profile: &ForecastProfile, path: &Path) -> Result<(), ForecastError> {
    let tmp = tmp_path(path);
    let json = serde_json::to_string_pretty(profile)?;
    write_atomic(&tmp, &json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a profile snapshot from disk, returning structured errors on failure.
pub fn load_profile(path: &Path) -> Result<ForecastProfile, ForecastError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
