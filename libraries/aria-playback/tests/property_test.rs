//! Property-based tests for the playback controller
//!
//! Uses proptest to verify the sequencing invariants across many random
//! transport histories.


use aria_playback::PlaybackController;
use mock_device::*;
use proptest::prelude::*;

fn file_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("music/track-{i}.mp3")).collect()
}

proptest! {
    /// Property: at most one audio handle is alive at any point, whatever
    /// the order of transport calls and completion reports
    #[test]
    fn at_most_one_handle_across_random_transport(
        ops in prop::collection::vec(0u8..5, 1..60)
    ) {
        let names = file_names(3);
        let media = media_root_with_files(&names);
        let (device, log) = MockDevice::new();
        let mut controller =
            PlaybackController::new(Box::new(device), media.path().to_path_buf());
        controller.set_tracks(track_list(&names));

        for op in ops {
            match op {
                0 => {
                    controller.next().ok();
                }
                1 => {
                    controller.previous().ok();
                }
                2 => {
                    controller.toggle().ok();
                }
                3 => {
                    // The active handle (if any) reports completion
                    log.send_finished();
                    controller.pump().ok();
                }
                _ => {
                    controller.shutdown();
                }
            }

            prop_assert!(
                log.live_handles() <= 1,
                "more than one live handle after an operation"
            );
        }

        prop_assert!(log.max_live_handles() <= 1, "two handles overlapped");
    }

    /// Property: `next()` applied `track_count` times returns to the start
    #[test]
    fn next_closes_the_cycle(n in 1usize..8) {
        let names = file_names(n);
        let media = media_root_with_files(&names);
        let (device, _log) = MockDevice::new();
        let mut controller =
            PlaybackController::new(Box::new(device), media.path().to_path_buf());
        controller.set_tracks(track_list(&names));

        controller.load(0).unwrap();
        for _ in 0..n {
            controller.next().unwrap();
        }

        prop_assert_eq!(controller.current_index(), 0);
    }

    /// Property: `previous()` from index 0 yields the last index
    #[test]
    fn previous_from_zero_wraps_to_last(n in 1usize..8) {
        let names = file_names(n);
        let media = media_root_with_files(&names);
        let (device, _log) = MockDevice::new();
        let mut controller =
            PlaybackController::new(Box::new(device), media.path().to_path_buf());
        controller.set_tracks(track_list(&names));

        controller.load(0).unwrap();
        controller.previous().unwrap();

        prop_assert_eq!(controller.current_index(), n - 1);
    }
}
