use pgen::pass::charset::{EXTENDED_SPECIAL, SPECIAL};
use pgen::terminal::Panel;

fn class_list(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn print_help() {
    Panel::new("pgen")
        .center("Parallel random string generator")
        .line("")
        .line("USAGE:")
        .line("  pgen [OPTIONS] [LENGTH]")
        .line("")
        .line("  With no class flags, -luds is used. Secure mode is the default.")
        .line("")
        .line(" Characters:")
        .opt("  -l, --lower", "Lowercase a-z")
        .opt("  -u, --upper", "Uppercase A-Z")
        .opt("  -d, --digits", "Digits 0-9")
        .opt("  -s, --special", &format!("Special: {}", class_list(SPECIAL)))
        .opt(
            "  -e, --extended",
            &format!("Extended special (implies -s): '{}'", class_list(EXTENDED_SPECIAL)),
        )
        .opt("  -C, --custom <CHARS>", "Use only these characters")
        .opt("  -x, --exclude <CHARS>", "Never emit these characters")
        .line("")
        .line(" Generation:")
        .opt("  --length <N>", "Characters per string (default: 16)")
        .opt("  -n, --number <N>", "How many strings to generate")
        .opt("  -t, --threads <N>", "Fill workers, clamped to 1..24 (default: 4)")
        .opt("  -S, --secure", "Rejection-sampled OS entropy (default)")
        .opt("  -f, --fast", "Seeded xorshift, not for secrets")
        .opt("  -E, --entropy", "Report Shannon entropy to stderr")
        .line("")
        .line(" Output:")
        .opt("  -b, --board", "Copy to clipboard instead of printing")
        .opt("  -q, --quiet", "Suppress warnings and prompts")
        .line("")
        .line(" Settings:")
        .opt("  -c, --command [FLAGS]", "Save flags as the default command. Alone: clear. `get`: show.")
        .opt("  --save", "Save this run's settings")
        .opt("  --saved", "Start from saved settings")
        .opt("  --default", "Ignore the saved command")
        .line("")
        .line(" Info:")
        .opt("  -h, --help", "Display this help message")
        .opt("  -v, --version", "Display version")
        .line("")
        .line("EXAMPLES:")
        .line("  pgen -d 10             Ten digits")
        .line("  pgen -luds 24 -n 3     Three 24-character strings")
        .line("  pgen -l -x ab 8        Lowercase without a or b")
        .line("  pgen -C XY 4           Four characters from X and Y")
        .line("  pgen -f -t 8 1000000   One million characters, eight workers")
        .line("  pgen -c -lud 20        Save -lud 20 as default")
        .line("")
        .bottom()
        .print();
}
