//! Zip archive writing for a single bundle folder

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use chrono::{Datelike, Local, Timelike};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Result, UpdateError};
use crate::ui::ProgressReporter;

/// Entries at or above this size need zip64 headers
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// A regular file found inside a bundle folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    pub path: PathBuf,
    /// Path relative to the bundle folder, `/`-separated
    pub entry_name: String,
}

/// What went into a written archive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveStats {
    pub files: usize,
    pub bytes: u64,
}

/// Archive entry name for a path relative to the bundle folder
pub fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Every regular file under `bundle_dir`, recursively, in a stable order.
///
/// Symlinks to files are included (their target's bytes are archived);
/// symlinks to directories are not descended into.
pub fn collect_files(bundle_dir: &Path) -> Result<Vec<BundleFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(bundle_dir)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(bundle_dir)
            .unwrap_or_else(|_| entry.path());
        files.push(BundleFile {
            path: entry.path().to_path_buf(),
            entry_name: entry_name(relative),
        });
    }

    Ok(files)
}

/// Write every file under `bundle_dir` into a fresh deflate archive at
/// `archive_path`, replacing any previous archive.
///
/// The archive is staged in a temporary file next to `archive_path` and
/// only moved into place once complete.
pub fn write_archive(
    bundle_dir: &Path,
    archive_path: &Path,
    progress: &mut dyn ProgressReporter,
) -> Result<ArchiveStats> {
    let failed = |reason: String| UpdateError::ArchiveFailed {
        path: archive_path.display().to_string(),
        reason,
    };

    let files = collect_files(bundle_dir).map_err(|e| failed(e.to_string()))?;
    let staging_dir = archive_path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = tempfile::Builder::new()
        .prefix(".bundle-")
        .suffix(".zip.tmp")
        .tempfile_in(staging_dir)
        .map_err(|e| failed(e.to_string()))?;

    let name = bundle_dir
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    progress.start_archive(&name, files.len() as u64);

    let result = write_entries(staged.as_file_mut(), &files, progress);
    progress.finish_archive();
    let stats = result.map_err(|e| failed(e.to_string()))?;

    set_archive_mode(staged.path(), archive_path).map_err(|e| failed(e.to_string()))?;
    staged
        .persist(archive_path)
        .map_err(|e| failed(e.error.to_string()))?;

    tracing::debug!(
        archive = %archive_path.display(),
        files = stats.files,
        bytes = stats.bytes,
        "archive written"
    );
    Ok(stats)
}

/// Mode for a fresh `bundle.zip`; rebuilds keep the previous archive's mode
#[cfg(unix)]
const DEFAULT_ARCHIVE_MODE: u32 = 0o644;

/// Give the staged file the mode of the archive it replaces, since temp
/// files are created owner-only
#[cfg(unix)]
fn set_archive_mode(staged: &Path, archive_path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(archive_path)
        .ok()
        .filter(fs::Metadata::is_file)
        .map_or(DEFAULT_ARCHIVE_MODE, |m| m.permissions().mode() & 0o777);
    fs::set_permissions(staged, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_archive_mode(_staged: &Path, _archive_path: &Path) -> io::Result<()> {
    Ok(())
}

fn write_entries(
    out: &mut File,
    files: &[BundleFile],
    progress: &mut dyn ProgressReporter,
) -> zip::result::ZipResult<ArchiveStats> {
    let mut zip = ZipWriter::new(out);
    let mut stats = ArchiveStats::default();

    for file in files {
        let metadata = fs::metadata(&file.path)?;
        zip.start_file(file.entry_name.clone(), entry_options(&metadata))?;
        let mut reader = File::open(&file.path)?;
        stats.bytes += io::copy(&mut reader, &mut zip)?;
        stats.files += 1;

        tracing::trace!(entry = %file.entry_name, "added");
        progress.file_added(&file.entry_name);
    }

    zip.finish()?;
    Ok(stats)
}

fn entry_options(metadata: &fs::Metadata) -> FileOptions {
    let mut options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(metadata.len() >= ZIP64_THRESHOLD);

    if let Some(modified) = metadata.modified().ok().and_then(zip_timestamp) {
        options = options.last_modified_time(modified);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options = options.unix_permissions(metadata.permissions().mode() & 0o777);
    }

    options
}

/// Zip timestamps are local time with two-second resolution, 1980..=2107
fn zip_timestamp(time: std::time::SystemTime) -> Option<zip::DateTime> {
    let local: chrono::DateTime<Local> = time.into();
    zip::DateTime::from_date_and_time(
        u16::try_from(local.year()).ok()?,
        u8::try_from(local.month()).ok()?,
        u8::try_from(local.day()).ok()?,
        u8::try_from(local.hour()).ok()?,
        u8::try_from(local.minute()).ok()?,
        u8::try_from(local.second()).ok()?,
    )
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SilentProgressReporter;
    use std::io::Read;
    use tempfile::TempDir;

    fn read_entries(archive: &Path) -> Vec<(String, Vec<u8>)> {
        let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
        let mut entries = Vec::new();
        for i in 0..zip.len() {
            let mut entry = zip.by_index(i).unwrap();
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes).unwrap();
            entries.push((entry.name().to_string(), bytes));
        }
        entries
    }

    fn bundle_with(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let bundle = temp.path().join("week-1").join("bundle");
        fs::create_dir_all(&bundle).unwrap();
        for (name, contents) in files {
            let path = bundle.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, contents).unwrap();
        }
        (temp, bundle)
    }

    #[test]
    fn test_entry_name_uses_forward_slashes() {
        let relative: PathBuf = ["sub", "deeper", "b.txt"].iter().collect();
        assert_eq!(entry_name(&relative), "sub/deeper/b.txt");
        assert_eq!(entry_name(Path::new("a")), "a");
    }

    #[test]
    fn test_collect_files_is_sorted_and_skips_directories() {
        let (_temp, bundle) = bundle_with(&[("z.txt", "z"), ("a.txt", "a"), ("sub/b.txt", "b")]);
        fs::create_dir_all(bundle.join("empty")).unwrap();

        let names: Vec<_> = collect_files(&bundle)
            .unwrap()
            .into_iter()
            .map(|f| f.entry_name)
            .collect();
        assert_eq!(names, vec!["a.txt", "sub/b.txt", "z.txt"]);
    }

    #[test]
    fn test_archive_mirrors_bundle_structure() {
        let (_temp, bundle) = bundle_with(&[("a", "alpha"), ("sub/b", "\x00\x01binary")]);
        let archive = bundle.parent().unwrap().join("bundle.zip");

        let stats = write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();

        assert_eq!(stats.files, 2);
        assert_eq!(stats.bytes, 13);
        assert_eq!(
            read_entries(&archive),
            vec![
                ("a".to_string(), b"alpha".to_vec()),
                ("sub/b".to_string(), b"\x00\x01binary".to_vec()),
            ]
        );
    }

    #[test]
    fn test_entries_are_deflated() {
        let text = "repeat ".repeat(500);
        let (_temp, bundle) = bundle_with(&[("big.txt", text.as_str())]);
        let archive = bundle.parent().unwrap().join("bundle.zip");
        write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();

        let mut zip = zip::ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        let entry = zip.by_index(0).unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
        assert!(entry.compressed_size() < entry.size());
    }

    #[test]
    fn test_rebuild_replaces_previous_archive() {
        let (_temp, bundle) = bundle_with(&[("keep.txt", "v1")]);
        let archive = bundle.parent().unwrap().join("bundle.zip");
        fs::write(&archive, b"stale bytes that are not a zip").unwrap();

        write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();
        let first = read_entries(&archive);
        write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();
        let second = read_entries(&archive);

        assert_eq!(first, vec![("keep.txt".to_string(), b"v1".to_vec())]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_removed_files_disappear_from_archive() {
        let (_temp, bundle) = bundle_with(&[("a.txt", "a"), ("b.txt", "b")]);
        let archive = bundle.parent().unwrap().join("bundle.zip");
        write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();

        fs::remove_file(bundle.join("b.txt")).unwrap();
        write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();

        let names: Vec<_> = read_entries(&archive).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a.txt"]);
    }

    #[test]
    fn test_empty_bundle_yields_empty_archive() {
        let (_temp, bundle) = bundle_with(&[]);
        let archive = bundle.parent().unwrap().join("bundle.zip");

        let stats = write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();
        assert_eq!(stats, ArchiveStats::default());
        assert!(read_entries(&archive).is_empty());
    }

    #[test]
    fn test_unwritable_target_reports_archive_failure() {
        let (_temp, bundle) = bundle_with(&[("a.txt", "a")]);
        let archive = bundle.parent().unwrap().join("bundle.zip");
        // A directory squatting on the archive path cannot be replaced by a file
        fs::create_dir(&archive).unwrap();

        let err = write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap_err();
        assert!(matches!(err, UpdateError::ArchiveFailed { .. }));
        assert!(archive.is_dir());

        let leftovers: Vec<_> = fs::read_dir(bundle.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".zip.tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_archive_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, bundle) = bundle_with(&[("a.txt", "a")]);
        let archive = bundle.parent().unwrap().join("bundle.zip");
        write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();

        let mode = fs::metadata(&archive).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_rebuild_keeps_archive_mode() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, bundle) = bundle_with(&[("a.txt", "a")]);
        let archive = bundle.parent().unwrap().join("bundle.zip");
        for mode in [0o644, 0o640] {
            fs::write(&archive, b"old").unwrap();
            fs::set_permissions(&archive, fs::Permissions::from_mode(mode)).unwrap();

            write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();

            let after = fs::metadata(&archive).unwrap().permissions().mode() & 0o777;
            assert_eq!(after, mode);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_permissions_are_kept() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, bundle) = bundle_with(&[("run.sh", "#!/bin/sh\n")]);
        fs::set_permissions(bundle.join("run.sh"), fs::Permissions::from_mode(0o755)).unwrap();
        let archive = bundle.parent().unwrap().join("bundle.zip");
        write_archive(&bundle, &archive, &mut SilentProgressReporter).unwrap();

        let mut zip = zip::ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        let entry = zip.by_index(0).unwrap();
        assert_eq!(entry.unix_mode().map(|m| m & 0o777), Some(0o755));
    }
}
