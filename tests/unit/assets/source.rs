use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "padel_hero_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn dir_source_reads_padded_file_names() {
    let root = temp_dir("dir_source");
    std::fs::create_dir_all(root.join("frames")).unwrap();
    std::fs::write(root.join("frames/frame_007.jpg"), b"seven").unwrap();

    let src = DirFrameSource::new(&root);
    let naming = FrameNaming::default();
    assert_eq!(
        src.path_for(FrameIndex(7), &naming).unwrap(),
        root.join("frames/frame_007.jpg")
    );
    assert_eq!(src.fetch(FrameIndex(7), &naming).unwrap(), b"seven");

    let err = src.fetch(FrameIndex(8), &naming).unwrap_err();
    assert!(err.to_string().contains("frame_008.jpg"));

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn memory_source_missing_index_is_an_asset_error() {
    let src = MemoryFrameSource::new().with_frame(FrameIndex(0), vec![1, 2, 3]);
    let naming = FrameNaming::default();
    assert_eq!(src.fetch(FrameIndex(0), &naming).unwrap(), vec![1, 2, 3]);

    let err = src.fetch(FrameIndex(1), &naming).unwrap_err();
    assert!(matches!(err, HeroError::Asset(_)));
    assert!(err.to_string().contains("frame_001.jpg"));
}
