//! Catalog of the bankswitch schemes known to the emulator.
//!
//! Maps scheme tags to their canonical names and descriptions, and answers
//! the name and file-extension lookups the ROM loader needs. All tables are
//! built once and never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BankswitchType {
    Auto,
    Bs0840,
    Bs2In1,
    Bs4In1,
    Bs8In1,
    Bs16In1,
    Bs32In1,
    Bs64In1,
    Bs128In1,
    Bs2K,
    Bs3E,
    Bs3EPlus,
    Bs3F,
    Bs4A50,
    Bs4K,
    Bs4KSC,
    Ar,
    Bf,
    Bfsc,
    Bus,
    Cdf,
    Cm,
    Cty,
    Cv,
    CvPlus,
    Dash,
    Df,
    Dfsc,
    Dpc,
    DpcPlus,
    E0,
    E7,
    E78K,
    Ef,
    Efsc,
    F0,
    F4,
    F4sc,
    F6,
    F6sc,
    F8,
    F8sc,
    Fa,
    Fa2,
    Fe,
    Mdm,
    Sb,
    Ua,
    Wd,
    X07,
    #[cfg(feature = "custom-arm")]
    Custom,
}

/// Display information for one scheme
#[derive(Debug)]
pub struct Description {
    pub bs_type: BankswitchType,
    pub name: &'static str,
    pub desc: &'static str,
}

impl Description {
    const fn new(bs_type: BankswitchType, name: &'static str, desc: &'static str) -> Self {
        Self { bs_type, name, desc }
    }
}

use BankswitchType as Bs;

#[rustfmt::skip]
pub static BS_LIST: &[Description] = &[
    Description::new(Bs::Auto,     "AUTO",   "Auto-detect"),
    Description::new(Bs::Bs0840,   "0840",   "0840 (8K ECONObank)"),
    Description::new(Bs::Bs2In1,   "2IN1",   "2in1 Multicart (4-32K)"),
    Description::new(Bs::Bs4In1,   "4IN1",   "4in1 Multicart (8-32K)"),
    Description::new(Bs::Bs8In1,   "8IN1",   "8in1 Multicart (16-64K)"),
    Description::new(Bs::Bs16In1,  "16IN1",  "16in1 Multicart (32-128K)"),
    Description::new(Bs::Bs32In1,  "32IN1",  "32in1 Multicart (64/128K)"),
    Description::new(Bs::Bs64In1,  "64IN1",  "64in1 Multicart (128/256K)"),
    Description::new(Bs::Bs128In1, "128IN1", "128in1 Multicart (256/512K)"),
    Description::new(Bs::Bs2K,     "2K",     "2K (64-2048 bytes Atari)"),
    Description::new(Bs::Bs3E,     "3E",     "3E (32K Tigervision)"),
    Description::new(Bs::Bs3EPlus, "3E+",    "3E+ (TJ modified DASH)"),
    Description::new(Bs::Bs3F,     "3F",     "3F (512K Tigervision)"),
    Description::new(Bs::Bs4A50,   "4A50",   "4A50 (64K 4A50 + ram)"),
    Description::new(Bs::Bs4K,     "4K",     "4K (4K Atari)"),
    Description::new(Bs::Bs4KSC,   "4KSC",   "4KSC (CPUWIZ 4K + ram)"),
    Description::new(Bs::Ar,       "AR",     "AR (Supercharger)"),
    Description::new(Bs::Bf,       "BF",     "BF (CPUWIZ 256K)"),
    Description::new(Bs::Bfsc,     "BFSC",   "BFSC (CPUWIZ 256K + ram)"),
    Description::new(Bs::Bus,      "BUS",    "BUS (Experimental)"),
    Description::new(Bs::Cdf,      "CDF",    "CDF (Chris, Darrell, Fred)"),
    Description::new(Bs::Cm,       "CM",     "CM (SpectraVideo CompuMate)"),
    Description::new(Bs::Cty,      "CTY",    "CTY (CDW - Chetiry)"),
    Description::new(Bs::Cv,       "CV",     "CV (Commavid extra ram)"),
    Description::new(Bs::CvPlus,   "CV+",    "CV+ (Extended Commavid)"),
    Description::new(Bs::Dash,     "DASH",   "DASH (Experimental)"),
    Description::new(Bs::Df,       "DF",     "DF (CPUWIZ 128K)"),
    Description::new(Bs::Dfsc,     "DFSC",   "DFSC (CPUWIZ 128K + ram)"),
    Description::new(Bs::Dpc,      "DPC",    "DPC (Pitfall II)"),
    Description::new(Bs::DpcPlus,  "DPC+",   "DPC+ (Enhanced DPC)"),
    Description::new(Bs::E0,       "E0",     "E0 (8K Parker Bros)"),
    Description::new(Bs::E7,       "E7",     "E7 (16K M-network)"),
    Description::new(Bs::E78K,     "E78K",   "E78K (8K M-network)"),
    Description::new(Bs::Ef,       "EF",     "EF (64K H. Runner)"),
    Description::new(Bs::Efsc,     "EFSC",   "EFSC (64K H. Runner + ram)"),
    Description::new(Bs::F0,       "F0",     "F0 (Dynacom Megaboy)"),
    Description::new(Bs::F4,       "F4",     "F4 (32K Atari)"),
    Description::new(Bs::F4sc,     "F4SC",   "F4SC (32K Atari + ram)"),
    Description::new(Bs::F6,       "F6",     "F6 (16K Atari)"),
    Description::new(Bs::F6sc,     "F6SC",   "F6SC (16K Atari + ram)"),
    Description::new(Bs::F8,       "F8",     "F8 (8K Atari)"),
    Description::new(Bs::F8sc,     "F8SC",   "F8SC (8K Atari + ram)"),
    Description::new(Bs::Fa,       "FA",     "FA (CBS RAM Plus)"),
    Description::new(Bs::Fa2,      "FA2",    "FA2 (CBS RAM Plus 24/28K)"),
    Description::new(Bs::Fe,       "FE",     "FE (8K Decathlon)"),
    Description::new(Bs::Mdm,      "MDM",    "MDM (Menu Driven Megacart)"),
    Description::new(Bs::Sb,       "SB",     "SB (128-256K SUPERbank)"),
    Description::new(Bs::Ua,       "UA",     "UA (8K UA Ltd.)"),
    Description::new(Bs::Wd,       "WD",     "WD (Experimental)"),
    Description::new(Bs::X07,      "X07",    "X07 (64K AtariAge)"),
    #[cfg(feature = "custom-arm")]
    Description::new(Bs::Custom,   "CUSTOM", "CUSTOM (ARM)"),
];

// Extensions that carry no scheme information map to Auto.
#[rustfmt::skip]
const EXTENSIONS: &[(&str, BankswitchType)] = &[
    ("a26", Bs::Auto), ("bin", Bs::Auto), ("rom", Bs::Auto), ("cu", Bs::Auto),
    ("084", Bs::Bs0840), ("0840", Bs::Bs0840),
    ("2N1", Bs::Bs2In1), ("4N1", Bs::Bs4In1), ("8N1", Bs::Bs8In1),
    ("16N", Bs::Bs16In1), ("16N1", Bs::Bs16In1),
    ("32N", Bs::Bs32In1), ("32N1", Bs::Bs32In1),
    ("64N", Bs::Bs64In1), ("64N1", Bs::Bs64In1),
    ("128", Bs::Bs128In1), ("128N1", Bs::Bs128In1),
    ("2K", Bs::Bs2K),
    ("3E", Bs::Bs3E),
    ("3EP", Bs::Bs3EPlus), ("3E+", Bs::Bs3EPlus),
    ("3F", Bs::Bs3F),
    ("4A5", Bs::Bs4A50), ("4A50", Bs::Bs4A50),
    ("4K", Bs::Bs4K),
    ("4KS", Bs::Bs4KSC), ("4KSC", Bs::Bs4KSC),
    ("AR", Bs::Ar),
    ("BF", Bs::Bf),
    ("BFS", Bs::Bfsc), ("BFSC", Bs::Bfsc),
    ("BUS", Bs::Bus),
    ("CDF", Bs::Cdf),
    ("CM", Bs::Cm),
    ("CTY", Bs::Cty),
    ("CV", Bs::Cv),
    ("CVP", Bs::CvPlus),
    ("DAS", Bs::Dash), ("DASH", Bs::Dash),
    ("DF", Bs::Df),
    ("DFS", Bs::Dfsc), ("DFSC", Bs::Dfsc),
    ("DPC", Bs::Dpc),
    ("DPP", Bs::DpcPlus), ("DPCP", Bs::DpcPlus),
    ("E0", Bs::E0),
    ("E7", Bs::E7),
    ("E78", Bs::E78K), ("E78K", Bs::E78K),
    ("EF", Bs::Ef),
    ("EFS", Bs::Efsc), ("EFSC", Bs::Efsc),
    ("F0", Bs::F0),
    ("F4", Bs::F4),
    ("F4S", Bs::F4sc), ("F4SC", Bs::F4sc),
    ("F6", Bs::F6),
    ("F6S", Bs::F6sc), ("F6SC", Bs::F6sc),
    ("F8", Bs::F8),
    ("F8S", Bs::F8sc), ("F8SC", Bs::F8sc),
    ("FA", Bs::Fa),
    ("FA2", Bs::Fa2),
    ("FE", Bs::Fe),
    ("MDM", Bs::Mdm),
    ("SB", Bs::Sb),
    ("UA", Bs::Ua),
    ("WD", Bs::Wd),
    ("X07", Bs::X07),
];

// Keys are stored uppercased; lookups uppercase their input.
static NAME_TO_TYPE: Lazy<HashMap<String, BankswitchType>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for desc in BS_LIST {
        map.insert(desc.name.to_ascii_uppercase(), desc.bs_type);
    }
    map
});

static EXTENSION_TO_TYPE: Lazy<HashMap<String, BankswitchType>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for &(ext, bs_type) in EXTENSIONS {
        map.insert(ext.to_ascii_uppercase(), bs_type);
    }
    map
});

impl BankswitchType {
    /// Every known scheme, in catalog order
    pub fn all() -> impl Iterator<Item = BankswitchType> {
        BS_LIST.iter().map(|desc| desc.bs_type)
    }

    pub fn description(self) -> &'static Description {
        // BS_LIST holds exactly one entry per variant, in declaration order
        &BS_LIST[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.description().name
    }

    pub fn desc(self) -> &'static str {
        self.description().desc
    }
}

impl fmt::Display for BankswitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Canonical name of a scheme ("F8SC", "E7", ...)
pub fn type_to_name(bs_type: BankswitchType) -> &'static str {
    bs_type.name()
}

/// Scheme for a name, ignoring case. Unknown names resolve to `Auto`.
pub fn name_to_type(name: &str) -> BankswitchType {
    NAME_TO_TYPE
        .get(&name.trim().to_ascii_uppercase())
        .copied()
        .unwrap_or(BankswitchType::Auto)
}

/// Scheme implied by a filename extension (without the dot), `Auto` if unknown
pub fn type_from_extension(ext: &str) -> BankswitchType {
    EXTENSION_TO_TYPE
        .get(&ext.to_ascii_uppercase())
        .copied()
        .unwrap_or(BankswitchType::Auto)
}

/// Extension of `name` if it is one of the recognised ROM extensions
pub fn rom_extension(name: &str) -> Option<&str> {
    let (_, ext) = name.rsplit_once('.')?;
    EXTENSION_TO_TYPE
        .contains_key(&ext.to_ascii_uppercase())
        .then_some(ext)
}

/// Scheme implied by a full filename, `Auto` if it carries no information
pub fn type_from_filename(name: &str) -> BankswitchType {
    rom_extension(name)
        .map(type_from_extension)
        .unwrap_or(BankswitchType::Auto)
}

/// True when the filename's extension selects a specific scheme
pub fn is_valid_rom_name(name: &str) -> bool {
    type_from_filename(name) != BankswitchType::Auto
}
