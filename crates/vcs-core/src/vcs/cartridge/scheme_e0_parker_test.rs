#[cfg(test)]
mod test {
    use crate::vcs::bankswitch::BankswitchType;
    use crate::vcs::bus::cart_bus::CartBus;
    use crate::vcs::cartridge::CartridgeConfig;
    use crate::vcs::test_utils::{banked_image, cart_bus, floating};

    fn e0() -> CartBus {
        cart_bus(banked_image(8, 0x400), BankswitchType::E0)
    }

    #[test]
    fn test_startup_slices() {
        let mut bus = e0();
        let fb = floating(0);

        assert_eq!(bus.peek(0x1000, &fb), 4);
        assert_eq!(bus.peek(0x1400, &fb), 5);
        assert_eq!(bus.peek(0x1800, &fb), 6);
        assert_eq!(bus.peek(0x1C00, &fb), 7);
        assert_eq!(bus.cartridge().selection().slices(), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_each_segment_has_its_hotspots() {
        let mut bus = e0();
        let fb = floating(0);

        assert_eq!(bus.peek(0x1FE2, &fb), 7);
        assert_eq!(bus.peek(0x1FEB, &fb), 7);
        bus.poke(0x1FF1, 0);

        assert_eq!(bus.cartridge().selection().slices(), &[2, 3, 1, 7]);
        assert_eq!(bus.peek(0x13FF, &fb), 2);
        assert_eq!(bus.peek(0x17FF, &fb), 3);
        assert_eq!(bus.peek(0x1BFF, &fb), 1);
        assert_eq!(bus.peek(0x1FFF, &fb), 7);
    }

    #[test]
    fn test_bank_drives_first_segment() {
        let mut bus = e0();
        let fb = floating(0);

        assert!(bus.bank(1));
        assert_eq!(bus.get_bank(), 1);
        assert_eq!(bus.peek(0x1000, &fb), 1);
        assert_eq!(bus.peek(0x1400, &fb), 5);
        assert!(!bus.bank_ram(0));
    }

    #[test]
    fn test_lock_holds_all_segments() {
        let mut bus = e0();
        let fb = floating(0);
        bus.lock_bank();

        bus.peek(0x1FE0, &fb);
        bus.peek(0x1FE8, &fb);
        bus.peek(0x1FF0, &fb);
        assert_eq!(bus.cartridge().selection().slices(), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_patch_and_config() {
        let config = CartridgeConfig {
            start_bank: Some(0),
            ..Default::default()
        };
        let mut bus = CartBus::from_image(banked_image(8, 0x400), BankswitchType::E0, &config)
            .unwrap();
        let fb = floating(0);
        assert_eq!(bus.cartridge().selection().slices(), &[0, 5, 6, 7]);

        assert!(bus.patch(0x1400, 0xAA));
        assert_eq!(bus.peek(0x1400, &fb), 0xAA);
        assert_eq!(bus.cartridge().image()[5 * 0x400], 0xAA);
    }

    #[test]
    fn test_rom_writes_are_ignored() {
        let mut bus = e0();
        let fb = floating(0);
        assert!(!bus.poke(0x1000, 0x99));
        assert!(!bus.poke(0x1FC0, 0x99));
        assert_eq!(bus.peek(0x1000, &fb), 4);
    }
}
