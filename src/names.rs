//! Named constants that appear as literal arguments: colours, effects and lockup types.
//!
//! Each enumeration is backed by a constant spelling table listed in
//! declaration order, checked at compile time, so the canonical spelling of a
//! variant is a plain index into its table.

/// A named ProffieOS colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    AliceBlue,
    Aqua,
    Aquamarine,
    Azure,
    Bisque,
    Black,
    BlanchedAlmond,
    Blue,
    Chartreuse,
    Coral,
    Cornsilk,
    Cyan,
    DarkOrange,
    DeepPink,
    DeepSkyBlue,
    DodgerBlue,
    FloralWhite,
    Fuchsia,
    GhostWhite,
    Green,
    GreenYellow,
    HoneyDew,
    HotPink,
    Ivory,
    LavenderBlush,
    LemonChiffon,
    LightCyan,
    LightPink,
    LightSalmon,
    LightYellow,
    Lime,
    Magenta,
    MintCream,
    MistyRose,
    Moccasin,
    NavajoWhite,
    Orange,
    OrangeRed,
    PapayaWhip,
    PeachPuff,
    Pink,
    Red,
    SeaShell,
    Snow,
    SpringGreen,
    SteelBlue,
    Tomato,
    White,
    Yellow,
}

const COLOR_NAMES: &[(&str, Color)] = &[
    ("AliceBlue", Color::AliceBlue),
    ("Aqua", Color::Aqua),
    ("Aquamarine", Color::Aquamarine),
    ("Azure", Color::Azure),
    ("Bisque", Color::Bisque),
    ("Black", Color::Black),
    ("BlanchedAlmond", Color::BlanchedAlmond),
    ("Blue", Color::Blue),
    ("Chartreuse", Color::Chartreuse),
    ("Coral", Color::Coral),
    ("Cornsilk", Color::Cornsilk),
    ("Cyan", Color::Cyan),
    ("DarkOrange", Color::DarkOrange),
    ("DeepPink", Color::DeepPink),
    ("DeepSkyBlue", Color::DeepSkyBlue),
    ("DodgerBlue", Color::DodgerBlue),
    ("FloralWhite", Color::FloralWhite),
    ("Fuchsia", Color::Fuchsia),
    ("GhostWhite", Color::GhostWhite),
    ("Green", Color::Green),
    ("GreenYellow", Color::GreenYellow),
    ("HoneyDew", Color::HoneyDew),
    ("HotPink", Color::HotPink),
    ("Ivory", Color::Ivory),
    ("LavenderBlush", Color::LavenderBlush),
    ("LemonChiffon", Color::LemonChiffon),
    ("LightCyan", Color::LightCyan),
    ("LightPink", Color::LightPink),
    ("LightSalmon", Color::LightSalmon),
    ("LightYellow", Color::LightYellow),
    ("Lime", Color::Lime),
    ("Magenta", Color::Magenta),
    ("MintCream", Color::MintCream),
    ("MistyRose", Color::MistyRose),
    ("Moccasin", Color::Moccasin),
    ("NavajoWhite", Color::NavajoWhite),
    ("Orange", Color::Orange),
    ("OrangeRed", Color::OrangeRed),
    ("PapayaWhip", Color::PapayaWhip),
    ("PeachPuff", Color::PeachPuff),
    ("Pink", Color::Pink),
    ("Red", Color::Red),
    ("SeaShell", Color::SeaShell),
    ("Snow", Color::Snow),
    ("SpringGreen", Color::SpringGreen),
    ("SteelBlue", Color::SteelBlue),
    ("Tomato", Color::Tomato),
    ("White", Color::White),
    ("Yellow", Color::Yellow),
];

const _: () = {
    let mut i = 0;
    while i < COLOR_NAMES.len() {
        assert!(COLOR_NAMES[i].1 as usize == i);
        i += 1;
    }
    assert!(COLOR_NAMES.len() == Color::Yellow as usize + 1);
};

/// Upper-case spellings of the primaries, accepted on input only.
const PRIMARY_ALIASES: &[(&str, Color)] = &[
    ("RED", Color::Red),
    ("GREEN", Color::Green),
    ("BLUE", Color::Blue),
    ("YELLOW", Color::Yellow),
    ("CYAN", Color::Cyan),
    ("MAGENTA", Color::Magenta),
    ("WHITE", Color::White),
    ("BLACK", Color::Black),
];

impl Color {
    /// Exact-match lookup of a colour spelling.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        COLOR_NAMES
            .iter()
            .chain(PRIMARY_ALIASES)
            .find(|(name, _)| *name == text)
            .map(|(_, color)| *color)
    }

    /// The canonical spelling written by the serializer.
    #[must_use]
    pub fn name(self) -> &'static str {
        COLOR_NAMES[self as usize].0
    }

    pub fn all() -> impl Iterator<Item = Color> {
        COLOR_NAMES.iter().map(|(_, color)| *color)
    }
}

/// The part of the firmware an effect belongs to; used to group picker entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectGroup {
    General,
    Blaster,
    Minigame,
    User,
    Error,
}

/// A firmware event a style can react to, written `EFFECT_<NAME>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Effect {
    None,
    Clash,
    ClashUpdate,
    Blast,
    Force,
    Stab,
    Boot,
    LockupBegin,
    LockupEnd,
    DragBegin,
    DragEnd,
    Preon,
    Postoff,
    Ignition,
    Retraction,
    Change,
    Newfont,
    LowBattery,
    Powersave,
    BatteryLevel,
    VolumeLevel,
    On,
    Off,
    FastOn,
    FastOff,
    Quote,
    SecondaryIgnition,
    SecondaryRetraction,
    OffClash,
    NextQuote,
    InteractivePreon,
    InteractiveBlast,
    Track,
    BeginBattleMode,
    EndBattleMode,
    BeginAutoBlast,
    EndAutoBlast,
    AltSound,
    TransitionSound,
    SoundLoop,
    Stun,
    Fire,
    ClipIn,
    ClipOut,
    Reload,
    Mode,
    Range,
    Empty,
    Full,
    Jam,
    Unjam,
    PliOn,
    PliOff,
    GameStart,
    GameAction1,
    GameAction2,
    GameChoice,
    GameResponse1,
    GameResponse2,
    GameResult1,
    GameResult2,
    GameWin,
    GameLose,
    User1,
    User2,
    User3,
    User4,
    User5,
    User6,
    User7,
    User8,
    SdCardNotFound,
    ErrorInFontDirectory,
    ErrorInBladeArray,
    FontDirectoryNotFound,
}

const GENERAL_EFFECTS: &[(&str, Effect)] = &[
    ("NONE", Effect::None),
    ("CLASH", Effect::Clash),
    ("CLASH_UPDATE", Effect::ClashUpdate),
    ("BLAST", Effect::Blast),
    ("FORCE", Effect::Force),
    ("STAB", Effect::Stab),
    ("BOOT", Effect::Boot),
    ("LOCKUP_BEGIN", Effect::LockupBegin),
    ("LOCKUP_END", Effect::LockupEnd),
    ("DRAG_BEGIN", Effect::DragBegin),
    ("DRAG_END", Effect::DragEnd),
    ("PREON", Effect::Preon),
    ("POSTOFF", Effect::Postoff),
    ("IGNITION", Effect::Ignition),
    ("RETRACTION", Effect::Retraction),
    ("CHANGE", Effect::Change),
    ("NEWFONT", Effect::Newfont),
    ("LOW_BATTERY", Effect::LowBattery),
    ("POWERSAVE", Effect::Powersave),
    ("BATTERY_LEVEL", Effect::BatteryLevel),
    ("VOLUME_LEVEL", Effect::VolumeLevel),
    ("ON", Effect::On),
    ("OFF", Effect::Off),
    ("FAST_ON", Effect::FastOn),
    ("FAST_OFF", Effect::FastOff),
    ("QUOTE", Effect::Quote),
    ("SECONDARY_IGNITION", Effect::SecondaryIgnition),
    ("SECONDARY_RETRACTION", Effect::SecondaryRetraction),
    ("OFF_CLASH", Effect::OffClash),
    ("NEXT_QUOTE", Effect::NextQuote),
    ("INTERACTIVE_PREON", Effect::InteractivePreon),
    ("INTERACTIVE_BLAST", Effect::InteractiveBlast),
    ("TRACK", Effect::Track),
    ("BEGIN_BATTLE_MODE", Effect::BeginBattleMode),
    ("END_BATTLE_MODE", Effect::EndBattleMode),
    ("BEGIN_AUTO_BLAST", Effect::BeginAutoBlast),
    ("END_AUTO_BLAST", Effect::EndAutoBlast),
    ("ALT_SOUND", Effect::AltSound),
    ("TRANSITION_SOUND", Effect::TransitionSound),
    ("SOUND_LOOP", Effect::SoundLoop),
];

const BLASTER_EFFECTS: &[(&str, Effect)] = &[
    ("STUN", Effect::Stun),
    ("FIRE", Effect::Fire),
    ("CLIP_IN", Effect::ClipIn),
    ("CLIP_OUT", Effect::ClipOut),
    ("RELOAD", Effect::Reload),
    ("MODE", Effect::Mode),
    ("RANGE", Effect::Range),
    ("EMPTY", Effect::Empty),
    ("FULL", Effect::Full),
    ("JAM", Effect::Jam),
    ("UNJAM", Effect::Unjam),
    ("PLI_ON", Effect::PliOn),
    ("PLI_OFF", Effect::PliOff),
];

const MINIGAME_EFFECTS: &[(&str, Effect)] = &[
    ("GAME_START", Effect::GameStart),
    ("GAME_ACTION1", Effect::GameAction1),
    ("GAME_ACTION2", Effect::GameAction2),
    ("GAME_CHOICE", Effect::GameChoice),
    ("GAME_RESPONSE1", Effect::GameResponse1),
    ("GAME_RESPONSE2", Effect::GameResponse2),
    ("GAME_RESULT1", Effect::GameResult1),
    ("GAME_RESULT2", Effect::GameResult2),
    ("GAME_WIN", Effect::GameWin),
    ("GAME_LOSE", Effect::GameLose),
];

const USER_EFFECTS: &[(&str, Effect)] = &[
    ("USER1", Effect::User1),
    ("USER2", Effect::User2),
    ("USER3", Effect::User3),
    ("USER4", Effect::User4),
    ("USER5", Effect::User5),
    ("USER6", Effect::User6),
    ("USER7", Effect::User7),
    ("USER8", Effect::User8),
];

const ERROR_EFFECTS: &[(&str, Effect)] = &[
    ("SD_CARD_NOT_FOUND", Effect::SdCardNotFound),
    ("ERROR_IN_FONT_DIRECTORY", Effect::ErrorInFontDirectory),
    ("ERROR_IN_BLADE_ARRAY", Effect::ErrorInBladeArray),
    ("FONT_DIRECTORY_NOT_FOUND", Effect::FontDirectoryNotFound),
];

const EFFECT_GROUPS: &[(EffectGroup, &[(&str, Effect)])] = &[
    (EffectGroup::General, GENERAL_EFFECTS),
    (EffectGroup::Blaster, BLASTER_EFFECTS),
    (EffectGroup::Minigame, MINIGAME_EFFECTS),
    (EffectGroup::User, USER_EFFECTS),
    (EffectGroup::Error, ERROR_EFFECTS),
];

const EFFECT_PREFIX: &str = "EFFECT_";

const EFFECT_COUNT: usize = Effect::FontDirectoryNotFound as usize + 1;

/// Bare spelling and group of every effect, indexed by declaration order.
const EFFECT_NAMES: [(&str, EffectGroup); EFFECT_COUNT] = flatten_effect_groups();

const fn flatten_effect_groups() -> [(&'static str, EffectGroup); EFFECT_COUNT] {
    let mut out = [("", EffectGroup::General); EFFECT_COUNT];
    let mut next = 0;
    let mut g = 0;
    while g < EFFECT_GROUPS.len() {
        let (group, table) = EFFECT_GROUPS[g];
        let mut i = 0;
        while i < table.len() {
            assert!(table[i].1 as usize == next);
            out[next] = (table[i].0, group);
            next += 1;
            i += 1;
        }
        g += 1;
    }
    assert!(next == EFFECT_COUNT);
    out
}

fn effect_entries() -> impl Iterator<Item = &'static (&'static str, Effect)> {
    EFFECT_GROUPS.iter().flat_map(|(_, table)| table.iter())
}

impl Effect {
    /// Accepts both `BLAST` and `EFFECT_BLAST`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let bare = text.strip_prefix(EFFECT_PREFIX).unwrap_or(text);
        effect_entries()
            .find(|(name, _)| *name == bare)
            .map(|(_, effect)| *effect)
    }

    /// The bare table spelling, e.g. `BLAST`.
    #[must_use]
    pub fn name(self) -> &'static str {
        EFFECT_NAMES[self as usize].0
    }

    /// The spelling written by the serializer, e.g. `EFFECT_BLAST`.
    #[must_use]
    pub fn code(self) -> String {
        format!("{EFFECT_PREFIX}{}", self.name())
    }

    #[must_use]
    pub fn human_name(self) -> String {
        humanize(self.name())
    }

    #[must_use]
    pub fn group(self) -> EffectGroup {
        EFFECT_NAMES[self as usize].1
    }

    pub fn all() -> impl Iterator<Item = Effect> {
        effect_entries().map(|(_, effect)| *effect)
    }
}

/// The kind of lockup a style is reacting to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LockupType {
    None,
    Normal,
    Drag,
    Armed,
    Autofire,
    Melt,
    LightningBlock,
}

const LOCKUP_NAMES: &[(&str, LockupType)] = &[
    ("NONE", LockupType::None),
    ("NORMAL", LockupType::Normal),
    ("DRAG", LockupType::Drag),
    ("ARMED", LockupType::Armed),
    ("AUTOFIRE", LockupType::Autofire),
    ("MELT", LockupType::Melt),
    ("LIGHTNING_BLOCK", LockupType::LightningBlock),
];

const _: () = {
    let mut i = 0;
    while i < LOCKUP_NAMES.len() {
        assert!(LOCKUP_NAMES[i].1 as usize == i);
        i += 1;
    }
    assert!(LOCKUP_NAMES.len() == LockupType::LightningBlock as usize + 1);
};

impl LockupType {
    /// Accepts `NORMAL`, `LOCKUP_NORMAL` and `SaberBase::LOCKUP_NORMAL`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.strip_prefix("SaberBase::").unwrap_or(text);
        let bare = text.strip_prefix("LOCKUP_").unwrap_or(text);
        LOCKUP_NAMES
            .iter()
            .find(|(name, _)| *name == bare)
            .map(|(_, lockup)| *lockup)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        LOCKUP_NAMES[self as usize].0
    }

    #[must_use]
    pub fn human_name(self) -> String {
        humanize(self.name())
    }

    pub fn all() -> impl Iterator<Item = LockupType> {
        LOCKUP_NAMES.iter().map(|(_, lockup)| *lockup)
    }
}

/// `LOCKUP_BEGIN` -> `Lockup Begin`
fn humanize(code: &str) -> String {
    code.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
