use tracing::{debug, instrument};

use super::best_player;
use crate::{
    cli::{CliError, CommandResult},
    config::Config,
};

/// Toggle play/pause on the best player
///
/// # Errors
/// Returns CliError if no player runs or the player rejects the call
#[instrument(skip(config))]
pub async fn play_pause(config: &Config) -> CommandResult {
    let player = best_player(config).await?;
    player.play_pause().await?;

    Ok(format!("Toggled playback on {}", player.id().short_name()))
}

/// Skip to the next track
///
/// # Errors
/// Returns CliError if no player runs or the player rejects the call
#[instrument(skip(config))]
pub async fn next(config: &Config) -> CommandResult {
    let player = best_player(config).await?;
    player.next().await?;

    Ok(format!("Skipped to next track on {}", player.id().short_name()))
}

/// Go back to the previous track
///
/// # Errors
/// Returns CliError if no player runs or the player rejects the call
#[instrument(skip(config))]
pub async fn previous(config: &Config) -> CommandResult {
    let player = best_player(config).await?;
    player.previous().await?;

    Ok(format!(
        "Went to previous track on {}",
        player.id().short_name()
    ))
}

/// Jump to `seconds`, clamped to the track length when it is known
///
/// # Errors
/// Returns CliError if `seconds` is negative or not finite, no player runs,
/// or the player rejects the call
#[instrument(skip(config))]
pub async fn position(config: &Config, seconds: f64) -> CommandResult {
    let seconds = validate_position(seconds)?;
    let player = best_player(config).await?;

    let length = player.length().await?;
    let target = clamp_to_length(seconds, length);
    debug!(target, length, "Setting position");

    player.set_position(target).await?;
    Ok(format!("Moved {} to {target:.1}s", player.id().short_name()))
}

/// Change the volume by `delta`, staying within `[0, 1]`
///
/// # Errors
/// Returns CliError if `delta` is not finite, no player runs, or the
/// player rejects the call
#[instrument(skip(config))]
pub async fn volume(config: &Config, delta: f64) -> CommandResult {
    if !delta.is_finite() {
        return Err(CliError::InvalidArgument {
            arg: "delta".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    let player = best_player(config).await?;
    let volume = player.volume().await?.offset(delta);
    player.set_volume(volume).await?;

    Ok(format!(
        "Volume of {} set to {:.0}%",
        player.id().short_name(),
        volume.as_percentage()
    ))
}

pub(crate) fn validate_position(seconds: f64) -> Result<f64, CliError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(CliError::InvalidArgument {
            arg: "seconds".to_string(),
            reason: "must be a non-negative number".to_string(),
        });
    }
    Ok(seconds)
}

pub(crate) fn clamp_to_length(seconds: f64, length: f64) -> f64 {
    if length > 0.0 {
        seconds.min(length)
    } else {
        seconds
    }
}
