//! Background Sound Preview
//!
//! At most one clip plays at a time. Clicking another sound pauses the
//! active clip before the new one starts; clicking the active sound toggles
//! pause/resume without restarting it.

use std::cell::RefCell;

use web_sys::HtmlAudioElement;

/// What a click on a sound tile should do, given the active clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipAction {
    /// Pause whatever is active and start the clicked sound from the top
    Start,
    /// Clicked sound is active and paused: continue where it stopped
    Resume,
    /// Clicked sound is active and playing: pause it
    Pause,
}

/// Decide the action for a click. `active` is `(sound id, is paused)`.
pub fn next_action(active: Option<(u64, bool)>, clicked: u64) -> ClipAction {
    match active {
        Some((id, paused)) if id == clicked => {
            if paused {
                ClipAction::Resume
            } else {
                ClipAction::Pause
            }
        }
        _ => ClipAction::Start,
    }
}

thread_local! {
    static ACTIVE_CLIP: RefCell<Option<(u64, HtmlAudioElement)>> = const { RefCell::new(None) };
}

/// Preview state reported back to the UI after a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Playing(u64),
    Paused(u64),
}

/// Handle a click on a sound tile.
///
/// Returns `None` when the clip could not be created (bad URL); the previous
/// clip stays paused in that case.
pub fn toggle(id: u64, url: &str) -> Option<PreviewState> {
    ACTIVE_CLIP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let active = slot.as_ref().map(|(id, el)| (*id, el.paused()));

        match next_action(active, id) {
            ClipAction::Pause => {
                if let Some((_, el)) = slot.as_ref() {
                    let _ = el.pause();
                }
                Some(PreviewState::Paused(id))
            }
            ClipAction::Resume => {
                if let Some((_, el)) = slot.as_ref() {
                    let _ = el.play();
                }
                Some(PreviewState::Playing(id))
            }
            ClipAction::Start => {
                if let Some((_, el)) = slot.take() {
                    let _ = el.pause();
                }
                let el = HtmlAudioElement::new_with_src(url).ok()?;
                let _ = el.play();
                *slot = Some((id, el));
                Some(PreviewState::Playing(id))
            }
        }
    })
}

/// Drop the active clip, pausing it first. Used when the active sound is
/// deleted or the panel unmounts.
pub fn stop() {
    ACTIVE_CLIP.with(|slot| {
        if let Some((_, el)) = slot.borrow_mut().take() {
            let _ = el.pause();
        }
    });
}

/// Id of the clip currently holding the player, if any
pub fn active_id() -> Option<u64> {
    ACTIVE_CLIP.with(|slot| slot.borrow().as_ref().map(|(id, _)| *id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_click_starts() {
        assert_eq!(next_action(None, 3), ClipAction::Start);
    }

    #[test]
    fn clicking_other_sound_switches() {
        // A is playing, user clicks B: A must stop, B starts fresh
        assert_eq!(next_action(Some((1, false)), 2), ClipAction::Start);
        // same while A is paused
        assert_eq!(next_action(Some((1, true)), 2), ClipAction::Start);
    }

    #[test]
    fn clicking_active_sound_toggles() {
        assert_eq!(next_action(Some((1, false)), 1), ClipAction::Pause);
        assert_eq!(next_action(Some((1, true)), 1), ClipAction::Resume);
    }
}
