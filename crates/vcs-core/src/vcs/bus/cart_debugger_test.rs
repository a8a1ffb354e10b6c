#[cfg(test)]
mod test {
    use crate::vcs::bankswitch::BankswitchType;
    use crate::vcs::bus::cart_debugger::BankSummary;
    use crate::vcs::cartridge::SegmentKind;
    use crate::vcs::test_utils::{banked_image, cart_bus, floating, vectored_image};

    #[test]
    fn test_force_bank_bypasses_lock_once() {
        let mut bus = cart_bus(banked_image(4, 0x1000), BankswitchType::F6);
        bus.lock_bank();
        assert!(!bus.bank(2));

        assert!(bus.debugger().force_bank(0, 2));
        assert_eq!(bus.get_bank(), 2);
        assert!(bus.bank_locked());
        assert!(!bus.bank(1));
        assert_eq!(bus.peek(0x1000, &floating(0)), 2);
    }

    #[test]
    fn test_force_bank_keeps_unlocked_state() {
        let mut bus = cart_bus(banked_image(8, 0x800), BankswitchType::E7);
        let mut debugger = bus.debugger();
        assert!(debugger.force_bank(2, 3));
        assert!(!debugger.force_bank(1, 0));
        assert!(!debugger.is_locked());
        assert_eq!(debugger.selection().slices(), &[0, 7, 3]);
    }

    #[test]
    fn test_lock_through_debugger() {
        let mut bus = cart_bus(banked_image(4, 0x1000), BankswitchType::F6);
        bus.debugger().lock();
        assert!(bus.bank_locked());
        assert!(!bus.bank(1));
        bus.debugger().unlock();
        assert!(bus.bank(1));
    }

    #[test]
    fn test_bank_changed_flag() {
        let mut bus = cart_bus(banked_image(4, 0x1000), BankswitchType::F6);
        assert!(bus.debugger().take_bank_changed());
        assert!(!bus.debugger().take_bank_changed());

        bus.bank(1);
        assert!(bus.debugger().take_bank_changed());

        bus.lock_bank();
        bus.bank(2);
        assert!(!bus.debugger().take_bank_changed());

        bus.patch(0x1000, 0);
        assert!(bus.debugger().take_bank_changed());
    }

    #[test]
    fn test_write_port_read_is_reported_once() {
        let mut bus = cart_bus(banked_image(2, 0x1000), BankswitchType::F8sc);
        assert_eq!(bus.debugger().take_write_port_read(), None);

        bus.peek(0x1010, &floating(0));
        assert_eq!(bus.debugger().take_write_port_read(), Some(0x1010));
        assert_eq!(bus.debugger().take_write_port_read(), None);
    }

    #[test]
    fn test_segment_info() {
        let mut bus = cart_bus(banked_image(8, 0x400), BankswitchType::E0);
        let debugger = bus.debugger();
        let segments = debugger.segments();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[3].kind, SegmentKind::Fixed);
        assert_eq!(segments[2].origin, 0x1800);
        assert_eq!(debugger.bank_count(0), Some(8));
        assert_eq!(debugger.bank_count(4), None);
    }

    #[test]
    fn test_bank_summary_for_4k_banks() {
        let mut bus = cart_bus(vectored_image(8), BankswitchType::F4);
        let summary = bus.debugger().bank_summary();

        assert_eq!(summary.len(), 8);
        assert_eq!(
            summary[3],
            BankSummary {
                bank: 3,
                start: 0xC000,
                hotspot: Some(0x1FF7)
            }
        );
        assert_eq!(
            summary[3].to_string(),
            "Bank 3 @ $C000 - $CFFF (hotspot = $1FF7)"
        );
    }

    #[test]
    fn test_bank_summary_without_hotspots() {
        let mut bus = cart_bus(vectored_image(1), BankswitchType::Bs4K);
        let summary = bus.debugger().bank_summary();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].hotspot, None);
        assert_eq!(summary[0].to_string(), "Bank 0 @ $F000 - $FFFF");

        let mut bus = cart_bus(banked_image(8, 0x800), BankswitchType::E7);
        assert!(bus.debugger().bank_summary().is_empty());
    }
}
