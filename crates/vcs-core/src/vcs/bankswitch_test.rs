#[cfg(test)]
mod test {
    use crate::vcs::bankswitch::*;

    #[test]
    fn test_catalog_order_matches_enum() {
        for (i, desc) in BS_LIST.iter().enumerate() {
            assert_eq!(desc.bs_type as usize, i, "{} out of place", desc.name);
        }
    }

    #[test]
    fn test_name_round_trip_every_type() {
        for bs_type in BankswitchType::all() {
            let name = type_to_name(bs_type);
            assert_eq!(name_to_type(name), bs_type);
            assert_eq!(name_to_type(&name.to_ascii_lowercase()), bs_type);
            assert_eq!(type_to_name(name_to_type(name)), name);
        }
    }

    #[test]
    fn test_name_lookup_ignores_case_and_whitespace() {
        assert_eq!(name_to_type("f8sc"), BankswitchType::F8sc);
        assert_eq!(name_to_type(" E78k "), BankswitchType::E78K);
        assert_eq!(name_to_type("dpc+"), BankswitchType::DpcPlus);
        assert_eq!(name_to_type("not-a-scheme"), BankswitchType::Auto);
        assert_eq!(name_to_type(""), BankswitchType::Auto);
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(BankswitchType::Bs3EPlus.to_string(), "3E+");
        assert_eq!(BankswitchType::Fa.desc(), "FA (CBS RAM Plus)");
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(type_from_extension("F8S"), BankswitchType::F8sc);
        assert_eq!(type_from_extension("e78"), BankswitchType::E78K);
        assert_eq!(type_from_extension("dpp"), BankswitchType::DpcPlus);
        assert_eq!(type_from_extension("bin"), BankswitchType::Auto);
        assert_eq!(type_from_extension("txt"), BankswitchType::Auto);
    }

    #[test]
    fn test_filename_lookup() {
        assert_eq!(type_from_filename("Pitfall II.dpc"), BankswitchType::Dpc);
        assert_eq!(type_from_filename("Burgertime.E7"), BankswitchType::E7);
        assert_eq!(type_from_filename("combat.a26"), BankswitchType::Auto);
        assert_eq!(type_from_filename("README"), BankswitchType::Auto);

        assert_eq!(rom_extension("game.a26"), Some("a26"));
        assert_eq!(rom_extension("notes.txt"), None);
        assert_eq!(rom_extension("no_extension"), None);
    }

    #[test]
    fn test_valid_rom_name_requires_specific_scheme() {
        assert!(is_valid_rom_name("Asteroids.F8"));
        assert!(is_valid_rom_name("montezuma.e0"));
        assert!(!is_valid_rom_name("combat.bin"));
        assert!(!is_valid_rom_name("combat.a26"));
        assert!(!is_valid_rom_name("letter.doc"));
        assert!(!is_valid_rom_name("combat"));
    }
}
