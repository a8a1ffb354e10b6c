#[cfg(test)]
mod test {
    use crate::vcs::bankswitch::BankswitchType;
    use crate::vcs::bus::cart_bus::CartBus;
    use crate::vcs::cartridge::scheme_e7_mnetwork::CartridgeE7;
    use crate::vcs::cartridge::{CartridgeConfig, CartridgeError, SegmentKind};
    use crate::vcs::test_utils::{banked_image, cart_bus, floating};

    fn e7() -> CartBus {
        cart_bus(banked_image(8, 0x800), BankswitchType::E7)
    }

    #[test]
    fn test_startup_mapping() {
        let mut bus = e7();
        let fb = floating(0);

        assert_eq!(bus.get_bank(), 0);
        assert_eq!(bus.peek(0x1000, &fb), 0);
        assert_eq!(bus.peek(0x17FF, &fb), 0);
        assert_eq!(bus.peek(0x1A00, &fb), 7);
        assert_eq!(bus.peek(0x1FC0, &fb), 7);
        assert_eq!(bus.cartridge().selection().slices(), &[0, 7, 0]);
    }

    #[test]
    fn test_slice_hotspots() {
        let mut bus = e7();
        let fb = floating(0);

        // Hotspots live in the fixed slice
        assert_eq!(bus.peek(0x1FE3, &fb), 7);
        assert_eq!(bus.get_bank(), 3);
        assert_eq!(bus.peek(0x1000, &fb), 3);

        bus.poke(0x1FE6, 0);
        assert_eq!(bus.peek(0x1234, &fb), 6);
    }

    #[test]
    fn test_ram_bank_ports() {
        let mut bus = e7();
        let fb = floating(0);

        assert!(bus.poke(0x1800, 0x55));
        assert_eq!(bus.peek(0x1900, &fb), 0x55);

        bus.peek(0x1FE9, &fb);
        assert_eq!(bus.cartridge().selection().get(2), Some(1));
        assert_eq!(bus.peek(0x1900, &fb), 0);
        assert!(bus.poke(0x1800, 0x66));

        assert!(bus.bank_ram(0));
        assert_eq!(bus.peek(0x1900, &fb), 0x55);
        assert!(bus.bank_ram(1));
        assert_eq!(bus.peek(0x1900, &fb), 0x66);
        assert_eq!(bus.cartridge().ram()[0x400 + 0x100], 0x66);
    }

    #[test]
    fn test_last_slice_exposes_1k_ram() {
        let mut bus = e7();
        let fb = floating(0);

        assert!(!bus.poke(0x1000, 0x12));

        assert!(bus.bank(7));
        assert!(bus.poke(0x1000, 0x12));
        assert!(bus.poke(0x13FF, 0x13));
        assert_eq!(bus.peek(0x1400, &fb), 0x12);
        assert_eq!(bus.peek(0x17FF, &fb), 0x13);

        bus.bank(2);
        assert_eq!(bus.peek(0x1400, &fb), 2);
    }

    #[test]
    fn test_read_of_write_ports() {
        let mut bus = e7();
        bus.bank(7);

        assert_eq!(bus.peek(0x1010, &floating(0x34)), 0x34);
        assert_eq!(bus.peek(0x1410, &floating(0)), 0x34);
        assert_eq!(bus.debugger().take_write_port_read(), Some(0x1010));

        assert_eq!(bus.peek(0x18F0, &floating(0x56)), 0x56);
        assert_eq!(bus.peek(0x19F0, &floating(0)), 0x56);

        bus.lock_bank();
        assert_eq!(bus.peek(0x18F0, &floating(0x78)), 0x78);
        assert_eq!(bus.peek(0x19F0, &floating(0)), 0x56);
        assert_eq!(bus.debugger().take_write_port_read(), Some(0x18F0));
    }

    #[test]
    fn test_e78k_hotspots() {
        let mut bus = cart_bus(banked_image(4, 0x800), BankswitchType::E78K);
        let fb = floating(0);

        bus.peek(0x1FE0, &fb);
        assert_eq!(bus.get_bank(), 0);

        bus.peek(0x1FE6, &fb);
        assert_eq!(bus.get_bank(), 2);
        assert_eq!(bus.peek(0x1000, &fb), 2);
        assert_eq!(bus.peek(0x1A00, &fb), 3);

        bus.peek(0x1FE4, &fb);
        assert_eq!(bus.get_bank(), 0);
    }

    #[test]
    fn test_segments_and_clamping() {
        let mut bus = e7();
        let kinds: Vec<SegmentKind> = bus.cartridge().segments().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SegmentKind::Switchable, SegmentKind::Fixed, SegmentKind::RamBank]
        );

        assert!(bus.bank(12));
        assert_eq!(bus.get_bank(), 7);
        assert!(bus.bank_ram(9));
        assert_eq!(bus.cartridge().selection().get(2), Some(3));
    }

    #[test]
    fn test_patch_follows_mapping() {
        let mut bus = e7();
        let fb = floating(0);

        bus.bank(4);
        bus.patch(0x1010, 0xAA);
        assert_eq!(bus.peek(0x1010, &fb), 0xAA);
        assert_eq!(bus.cartridge().image()[4 * 0x800 + 0x10], 0xAA);

        bus.patch(0x1810, 0xBB);
        assert_eq!(bus.peek(0x1910, &fb), 0xBB);

        bus.bank(7);
        bus.patch(0x1410, 0xCC);
        assert_eq!(bus.peek(0x1410, &fb), 0xCC);

        bus.patch(0x1B00, 0xDD);
        assert_eq!(bus.peek(0x1B00, &fb), 0xDD);
    }

    #[test]
    fn test_wrong_size_is_corrupt() {
        let err = CartridgeE7::new(vec![0; 0x3000], BankswitchType::E7, &CartridgeConfig::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            CartridgeError::CorruptImage { scheme: "E7", actual: 0x3000, .. }
        ));
    }
}
