//! Built-in vocabulary tables.
//!
//! These are the defaults behind [`CorpusConfig::default`](crate::config::CorpusConfig).
//! Every table can be replaced through a JSON config file, so nothing here is
//! load-bearing for the pipeline itself.

/// Default sentinel that wraps injected tokens (`¤joy¤`).
///
/// Has no case mapping and sits outside `[0-9a-z]`, so lower-casing and the
/// whitelist leave it untouched.
pub const DEFAULT_MARKER: char = '¤';

/// Default name of the token placed between merged messages of one group.
pub const DEFAULT_BOUNDARY_TOKEN: &str = "newmsg";

/// Default inactivity gap that closes a thread.
pub const DEFAULT_THREAD_GAP_MINUTES: u32 = 30;

/// Prefix of quote-reply messages.
pub const DEFAULT_QUOTE_MARKER: &str = "> ";

/// First characters of bot commands.
pub const DEFAULT_COMMAND_PREFIXES: &[char] = &['.', '$'];

/// Characters that survive normalization (the sentinel is always added on top).
pub const DEFAULT_WHITELIST: &str = "0123456789abcdefghijklmnopqrstuvwxyz.!? ";

/// Punctuation split off into standalone tokens.
pub const DEFAULT_PUNCTUATION: &[char] = &['!', '?', '.'];

/// Mentions that address the whole channel.
pub const DEFAULT_BROADCAST_TAGS: &[&str] = &["@everyone", "@here"];

/// Server role mentions stripped alongside author names.
pub const DEFAULT_EXTRA_TAGS: &[&str] = &["@Bush did 911", "@Dj"];

/// Server emoji as they appear in exported text, with their token names.
pub const DEFAULT_CUSTOM_EMOJIS: &[(&str, &str)] = &[
    (":wrong:", "wrong"),
    (":whodid911:", "whodid911"),
    (":ts:", "ts"),
    (":triggered:", "triggered"),
    (":tinkerer:", "tinkerer"),
    (":tinfoil:", "tinfoil"),
    (":sulcW:", "sulcW"),
    (":sramekW:", "sramekW"),
    (":spedajsi:", "spedajsi"),
    (":skriW:", "skriW"),
    (":sinking:", "sinking"),
    (":seen:", "seen"),
    (":scorpW:", "scorpW"),
    (":respects:", "respects"),
    (":pica:", "pica"),
    (":penak:", "penak"),
    (":onlyfans:", "onlyfans"),
    (":OMEGALUL:", "OMEGALUL"),
    (":monke:", "monke"),
    (":MEGALUL:", "MEGALUL"),
    (":matkoW:", "matkoW"),
    (":matkoTip:", "matkoTip"),
    (":markoW:", "markoW"),
    (":lochW:", "lochW"),
    (":kys:", "kys"),
    (":kucaW:", "kucaW"),
    (":kara:", "kara"),
    (":invsinking:", "invsinking"),
    (":invcrucifix:", "invcrucifix"),
    (":invbackstab:", "invbackstab"),
    (":invalk:", "invalk"),
    (":HYPERLUL:", "HYPERLUL"),
    (":highnoon:", "highnoon"),
    (":gold:", "gold"),
    (":floralcoomer:", "floralcoomer"),
    (":fedorov:", "fedorov"),
    (":doubt:", "doubt"),
    (":domW:", "domW"),
    (":dolfW:", "dolfW"),
    (":cyklista:", "cyklista"),
    (":crucifix:", "crucifix"),
    (":CoolGuy:", "CoolGuy"),
    (":china:", "china"),
    (":breaded:", "breaded"),
    (":bombulus:", "bombulus"),
    (":bepis:", "bepis"),
    (":baconW:", "baconW"),
    (":backstab:", "backstab"),
    (":alk:", "alk"),
    (":4sg:", "4sg"),
];

/// The most frequent unicode emoji, with their token names.
pub const DEFAULT_EMOJI_CHARS: &[(&str, &str)] = &[
    ("😦", "frowning"),
    ("🤔", "thinking"),
    ("😄", "smile"),
    ("👌", "ok_hand"),
    ("😂", "joy"),
    ("🅱", "b"),
    ("😏", "smirk"),
    ("🙂", "slight_smile"),
    ("🤨", "face_with_raised_eyebrow"),
    ("🤷", "person_shrugging"),
    ("😳", "flushed"),
];

/// Czech/Slovak diacritics folded to plain ASCII letters.
pub const DEFAULT_DIACRITICS: &[(char, char)] = &[
    ('á', 'a'),
    ('ä', 'a'),
    ('č', 'c'),
    ('ď', 'd'),
    ('é', 'e'),
    ('ě', 'e'),
    ('í', 'i'),
    ('ĺ', 'l'),
    ('ľ', 'l'),
    ('ň', 'n'),
    ('ó', 'o'),
    ('ô', 'o'),
    ('ŕ', 'r'),
    ('ř', 'r'),
    ('š', 's'),
    ('ť', 't'),
    ('ú', 'u'),
    ('ů', 'u'),
    ('ý', 'y'),
    ('ž', 'z'),
    ('Á', 'A'),
    ('Ä', 'A'),
    ('Č', 'C'),
    ('Ď', 'D'),
    ('É', 'E'),
    ('Ě', 'E'),
    ('Í', 'I'),
    ('Ĺ', 'L'),
    ('Ľ', 'L'),
    ('Ň', 'N'),
    ('Ó', 'O'),
    ('Ô', 'O'),
    ('Ŕ', 'R'),
    ('Ř', 'R'),
    ('Š', 'S'),
    ('Ť', 'T'),
    ('Ú', 'U'),
    ('Ů', 'U'),
    ('Ý', 'Y'),
    ('Ž', 'Z'),
];
