//! Built-in mapping table.

/// `(source, dest)` pairs linked by default, in processing order.
///
/// `*.local` sources are per-machine files created by copying their
/// `.example` template; until then they report as missing.
pub const BUILTIN: &[(&str, &str)] = &[
    ("bashrc", ".bashrc"),
    ("bash_profile", ".bash_profile"),
    ("inputrc", ".inputrc"),
    ("zshrc", ".zshrc"),
    ("vimrc", ".vimrc"),
    ("tmux.conf", ".tmux.conf"),
    ("gitconfig", ".gitconfig"),
    ("gitignore_global", ".gitignore_global"),
    ("gitconfig.local", ".gitconfig.local"),
    ("bashrc.local", ".bashrc.local"),
];
