//! Transfer argument construction

use std::path::Path;

use crate::domain::value_objects::PendingPath;

use super::options::SyncOptions;

/// Flags passed on every run: compress, mirror deletions, keep permissions,
/// times and symlinks, recurse, read the path list from stdin, and log one
/// `<op> <path>` line per item.
const BASELINE_FLAGS: &[&str] = &[
    "--compress",
    "--delete",
    "--perms",
    "--times",
    "--links",
    "--recursive",
    "--files-from=-",
    "--out-format=%o %n",
];

/// Build the full argument list for one transfer run.
///
/// Deterministic: same options, same arguments.
pub fn build_transfer_args(options: &SyncOptions) -> Vec<String> {
    let mut args: Vec<String> = BASELINE_FLAGS.iter().map(|s| s.to_string()).collect();

    if options.dry_run {
        args.push("--dry-run".to_string());
    }

    if let Some(exclude) = &options.exclude_from {
        let exclude = if exclude.is_absolute() {
            exclude.clone()
        } else {
            options.root.join(exclude)
        };
        args.push(format!("--exclude-from={}", exclude.display()));

        if options.delete_excluded {
            args.push("--delete-excluded".to_string());
        }
    }

    args.extend(options.extra_args.iter().cloned());
    args.push(source_arg(&options.root));
    args.push(options.destination.clone());
    args
}

/// Source root with a trailing separator, so the root's contents (not the
/// directory itself) are mirrored.
pub fn source_arg(root: &Path) -> String {
    let mut source = root.display().to_string();
    if !source.ends_with('/') {
        source.push('/');
    }
    source
}

/// Newline-joined path list for the transfer's stdin
pub fn stdin_payload(paths: &[PendingPath]) -> String {
    let mut payload = String::new();
    for path in paths {
        payload.push_str(&path.to_transfer_line());
        payload.push('\n');
    }
    payload
}
