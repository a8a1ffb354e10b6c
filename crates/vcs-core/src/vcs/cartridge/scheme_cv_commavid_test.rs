#[cfg(test)]
mod test {
    use crate::vcs::bankswitch::BankswitchType;
    use crate::vcs::cartridge::scheme_cv_commavid::CartridgeCV;
    use crate::vcs::cartridge::{CartridgeConfig, CartridgeError};
    use crate::vcs::test_utils::{cart_bus, floating, patterned_image};

    #[test]
    fn test_rom_in_upper_half() {
        let image = patterned_image(0x800);
        let mut bus = cart_bus(image.clone(), BankswitchType::Cv);
        let fb = floating(0);

        assert_eq!(bus.peek(0x1800, &fb), image[0]);
        assert_eq!(bus.peek(0x1801, &fb), image[1]);
        assert_eq!(bus.peek(0x1FFF, &fb), image[0x7FF]);
        assert!(!bus.poke(0x1800, 0xFF));
    }

    #[test]
    fn test_ram_ports() {
        let mut bus = cart_bus(patterned_image(0x800), BankswitchType::Cv);
        let fb = floating(0);

        assert!(bus.poke(0x1400, 0x21));
        assert!(bus.poke(0x17FF, 0x22));
        assert_eq!(bus.peek(0x1000, &fb), 0x21);
        assert_eq!(bus.peek(0x13FF, &fb), 0x22);
        assert!(!bus.poke(0x1000, 0x99));
    }

    #[test]
    fn test_read_of_write_port() {
        let mut bus = cart_bus(patterned_image(0x800), BankswitchType::Cv);

        assert_eq!(bus.peek(0x1420, &floating(0x5A)), 0x5A);
        assert_eq!(bus.peek(0x1020, &floating(0)), 0x5A);

        bus.lock_bank();
        assert_eq!(bus.peek(0x1420, &floating(0x11)), 0x11);
        assert_eq!(bus.peek(0x1020, &floating(0)), 0x5A);
    }

    #[test]
    fn test_4k_image_preloads_ram() {
        let mut image = vec![0u8; 0x1000];
        image[..0x400].fill(0xC3);
        image[0x800..].fill(0x7E);

        let mut bus = cart_bus(image, BankswitchType::Cv);
        let fb = floating(0);
        assert_eq!(bus.cartridge().image().len(), 0x800);
        assert_eq!(bus.peek(0x1000, &fb), 0xC3);
        assert_eq!(bus.peek(0x1800, &fb), 0x7E);

        bus.poke(0x1400, 0);
        assert_eq!(bus.peek(0x1000, &fb), 0);
        bus.reset();
        assert_eq!(bus.peek(0x1000, &fb), 0xC3);
    }

    #[test]
    fn test_no_banking() {
        let mut bus = cart_bus(patterned_image(0x800), BankswitchType::Cv);
        assert!(!bus.bank(1));
        assert!(!bus.bank_ram(0));
        assert_eq!(bus.bank_count(), 1);
    }

    #[test]
    fn test_patch() {
        let mut bus = cart_bus(patterned_image(0x800), BankswitchType::Cv);
        let fb = floating(0);

        bus.patch(0x1005, 0x44);
        assert_eq!(bus.peek(0x1005, &fb), 0x44);
        bus.patch(0x1405, 0x45);
        assert_eq!(bus.peek(0x1005, &fb), 0x45);
        bus.patch(0x1805, 0x46);
        assert_eq!(bus.peek(0x1805, &fb), 0x46);
    }

    #[test]
    fn test_wrong_size_is_corrupt() {
        let err = CartridgeCV::new(vec![0; 3000], &CartridgeConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, CartridgeError::CorruptImage { actual: 3000, .. }));
    }
}
