pub const KEY_HINTS: [&str; 4] = [
    "↑/↓ Tab  move • ←/→ PgUp/PgDn Home/End  length",
    "Space  toggle • 1-4  toggle class",
    "Enter/g  generate • c  copy",
    "Esc/q/Ctrl+C  quit",
];
