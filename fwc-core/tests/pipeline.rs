mod common;

use std::fs;

use common::Image;
use fwc_core::report::Severity;
use fwc_core::{
    Container, Descriptor, Event, ExtractMode, ExtractOptions, Extractor, FwcError,
    MemoryReporter, NullReporter, extract,
};
use walkdir::WalkDir;

/// Root: index 2, 3 blocks. Files of 100 and 1024 bytes.
fn two_file_image() -> Vec<u8> {
    Image::new("dcp_corefs_3.11.update")
        .file("boot/uImage", vec![0x11u8; 100])
        .file("etc/config.bin", vec![0x22u8; 1024])
        .declared_blocks(3)
        .build()
}

#[test]
fn end_to_end_two_files() {
    let buf = two_file_image();
    assert_eq!(buf.len(), 512 + 512 + 1024);

    let r = MemoryReporter::new();
    let c = Container::from_bytes(buf, &r).unwrap();
    assert_eq!(c.data_start(), 512);

    let chunks: Vec<_> = c.files().iter().map(|f| f.chunk_size()).collect();
    let starts: Vec<_> = c.files().iter().map(|f| f.start_offset()).collect();
    assert_eq!(chunks, [512, 1024]);
    assert_eq!(starts, [512, 1024]);

    // 3 * 512 = 1536 declared vs 512 + 512 + 1024 = 2048 laid out
    assert_eq!(
        r.warnings(),
        vec![Event::SizeMismatch {
            declared: 1536,
            computed: 2048
        }]
    );

    let dir = tempfile::tempdir().unwrap();
    let summary = extract(&c, dir.path(), None, &r).unwrap();
    assert_eq!(summary.count(), 2);

    let uimage = fs::read(dir.path().join("boot/uImage")).unwrap();
    let config = fs::read(dir.path().join("etc/config.bin")).unwrap();
    assert_eq!(uimage.len(), 512);
    assert_eq!(&uimage[..100], &[0x11; 100][..]);
    assert!(uimage[100..].iter().all(|&b| b == 0));
    assert_eq!(config, vec![0x22; 1024]);
}

#[test]
fn extracted_tree_matches_container_order() {
    let buf = Image::new("upd")
        .file("a/one", "1")
        .file("a/b/two", "22")
        .file("three", "333")
        .build();
    let c = Container::from_bytes(buf, &NullReporter).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let summary = extract(&c, dir.path(), None, &NullReporter).unwrap();

    let names: Vec<_> = summary.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a/one", "a/b/two", "three"]);

    let mut on_disk: Vec<_> = WalkDir::new(dir.path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, ["a/b/two", "a/one", "three"]);
}

#[test]
fn consistent_container_has_no_warning() {
    let buf = Image::new("upd").file("x", vec![1u8; 700]).build();
    let r = MemoryReporter::new();
    Container::from_bytes(buf, &r).unwrap();
    assert!(r.warnings().is_empty());
    assert!(r.events().iter().any(|e| e.severity() == Severity::Info));
}

#[test]
fn truncated_last_entry_keeps_earlier_output() {
    let mut buf = Image::new("upd")
        .file("first.bin", vec![7u8; 300])
        .file("second.bin", vec![8u8; 1000])
        .build();
    // second chunk is 1024..2048; cut inside it
    buf.truncate(1500);

    let c = Container::from_bytes(buf, &NullReporter).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let err = extract(&c, dir.path(), None, &NullReporter).unwrap_err();
    assert!(
        matches!(
            &err,
            FwcError::TruncatedContainer { name, start: 1024, end: 2048, len: 1500 }
                if name == "second.bin"
        ),
        "{err}"
    );
    assert_eq!(fs::read(dir.path().join("first.bin")).unwrap().len(), 512);
    assert!(!dir.path().join("second.bin").exists());
}

#[test]
fn exact_mode_via_iterator() {
    let buf = two_file_image();
    let c = Container::from_bytes(buf, &NullReporter).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let opts = ExtractOptions {
        mode: ExtractMode::Exact,
        dry_run: false,
    };
    let sizes: Vec<u64> = Extractor::new(&c, dir.path(), opts, &NullReporter)
        .map(|r| r.unwrap().bytes)
        .collect();
    assert_eq!(sizes, [100, 1024]);
    assert_eq!(fs::read(dir.path().join("boot/uImage")).unwrap().len(), 100);
}

#[test]
fn corrupt_root_fails_before_anything_is_written() {
    for index in [0u32, 6000] {
        let mut buf = Descriptor::new("upd", index, 1).to_bytes().to_vec();
        buf.resize(4096, 0);
        let err = Container::from_bytes(buf, &NullReporter).unwrap_err();
        assert!(matches!(err, FwcError::CorruptDescriptor { index: i } if i == index));
    }
}

#[test]
fn container_shorter_than_its_table() {
    let mut buf = Image::new("upd").file("a", "x").file("b", "y").build();
    buf.truncate(200);
    let err = Container::from_bytes(buf, &NullReporter).unwrap_err();
    assert!(matches!(err, FwcError::Truncated { offset: 128, .. }));
}

#[test]
fn open_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dcp_corefs.update");
    fs::write(&path, two_file_image()).unwrap();

    let c = Container::open(&path, &NullReporter).unwrap();
    assert_eq!(c.root().name.decode(), "dcp_corefs_3.11.update");
    assert_eq!(c.files().len(), 2);
}

#[test]
fn nul_padded_name_yields_clean_path() {
    let buf = Image::new("upd").file("a/b.bin", "payload").build();
    let c = Container::from_bytes(buf, &NullReporter).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let summary = extract(&c, dir.path(), None, &NullReporter).unwrap();

    let path = &summary.files[0].path;
    assert_eq!(path, &dir.path().join("a").join("b.bin"));
    assert!(!path.to_string_lossy().contains('\0'));
}

#[test]
fn escaping_name_is_refused() {
    let buf = Image::new("upd").file("../evil", "x").build();
    let c = Container::from_bytes(buf, &NullReporter).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let err = extract(&c, &out, None, &NullReporter).unwrap_err();
    assert!(matches!(err, FwcError::UnsafePath { .. }));
    assert!(!dir.path().join("evil").exists());
}
