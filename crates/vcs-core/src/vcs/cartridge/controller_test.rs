#[cfg(test)]
mod test {
    use crate::vcs::cartridge::controller::*;

    #[test]
    fn test_hotspot_slice_is_distance_from_first() {
        let f6 = HotspotRange::new(0xFF6, 4);
        assert_eq!(f6.slice_for(0xFF6), Some(0));
        assert_eq!(f6.slice_for(0xFF8), Some(2));
        assert_eq!(f6.slice_for(0xFF9), Some(3));
        assert_eq!(f6.slice_for(0xFF5), None);
        assert_eq!(f6.slice_for(0xFFA), None);
    }

    #[test]
    fn test_hotspot_pages_and_addresses() {
        let f8 = HotspotRange::new(0xFF8, 2);
        assert_eq!(f8.first_page(), 0x1FC0);
        assert_eq!(f8.address_of(1), Some(0x1FF9));
        assert_eq!(f8.address_of(2), None);

        let bf = HotspotRange::new(0xF80, 64);
        assert_eq!(bf.first_page(), 0x1F80);
        assert_eq!(bf.address_of(63), Some(0x1FBF));
    }

    #[test]
    fn test_lock_blocks_every_cause() {
        let mut controller = BankSwitchController::new();
        assert!(controller.permit(0, TransitionCause::Explicit));

        controller.lock();
        assert!(controller.is_locked());
        for cause in [
            TransitionCause::Explicit,
            TransitionCause::Hotspot(0x1FF8),
            TransitionCause::Reset,
        ] {
            assert!(!controller.permit(0, cause));
        }

        controller.unlock();
        assert!(controller.permit(0, TransitionCause::Hotspot(0x1FF8)));
    }

    #[test]
    fn test_clamp_keeps_slice_in_range() {
        let controller = BankSwitchController::new();
        assert_eq!(controller.clamp(0, 3, 8), 3);
        assert_eq!(controller.clamp(0, 8, 8), 7);
        assert_eq!(controller.clamp(0, 0xFFFF, 4), 3);
    }

    #[test]
    fn test_flags_are_consumed_once() {
        let mut controller = BankSwitchController::new();
        assert!(!controller.take_bank_changed());

        controller.commit(0, 1, 2, TransitionCause::Explicit);
        assert!(controller.take_bank_changed());
        assert!(!controller.take_bank_changed());

        controller.note_write_port_read(0x1010);
        assert_eq!(controller.take_write_port_read(), Some(0x1010));
        assert_eq!(controller.take_write_port_read(), None);
    }

    #[test]
    fn test_lift_lock_reports_previous_state() {
        let mut controller = BankSwitchController::new();
        controller.lock();

        let was_locked = controller.lift_lock();
        assert!(was_locked);
        assert!(!controller.is_locked());

        controller.restore_lock(was_locked);
        assert!(controller.is_locked());
        assert!(controller.lift_lock());
        assert!(!controller.lift_lock());
    }
}
