//! Confirmation prompts for destructive commands

/// The user declined a confirmation prompt.
#[derive(Debug, thiserror::Error)]
#[error("Aborted.")]
pub struct Aborted;

/// Ask the user to type `confirmation` before an irreversible action.
///
/// An empty answer (just Enter) aborts.
pub fn no_going_back(confirmation: &str) -> dialoguer::Result<bool> {
    let answer: String = dialoguer::Input::new()
        .with_prompt(format!(
            "This action cannot be undone! Type \"{confirmation}\" or press Enter to abort"
        ))
        .allow_empty(true)
        .report(false)
        .interact_text()?;
    Ok(confirms(&answer, confirmation))
}

/// Whether `answer` is exactly the expected confirmation, ignoring surrounding space.
fn confirms(answer: &str, confirmation: &str) -> bool {
    !confirmation.is_empty() && answer.trim() == confirmation
}
