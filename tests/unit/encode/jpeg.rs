use super::*;
use crate::foundation::core::CanvasSize;

fn grey_frame(width: u32, height: u32) -> FrameRgb8 {
    FrameRgb8 {
        size: CanvasSize { width, height },
        data: vec![128u8; width as usize * height as usize * 3],
    }
}

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn encoded_bytes_decode_as_jpeg_of_same_size() {
    let bytes = encode_jpeg(&grey_frame(16, 8), 95).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (16, 8));
}

#[test]
fn bad_buffer_length_fails_to_encode() {
    let mut frame = grey_frame(4, 4);
    frame.data.truncate(7);
    let err = encode_jpeg(&frame, 95).unwrap_err();
    assert!(err.to_string().contains("4x4"));
}

#[test]
fn short_frame_is_write_error_not_panic() {
    let dir = out_dir("unit_jpeg_short_frame");
    let out = dir.join("final_status.jpg");
    let _ = std::fs::remove_file(&out);

    let mut frame = grey_frame(4, 4);
    frame.data.pop();
    let err = write_jpeg(&frame, 95, &out).unwrap_err();
    assert!(matches!(err, YearbarError::Write { .. }));
    assert!(!out.exists());
}

#[test]
fn write_overwrites_existing_output() {
    let dir = out_dir("unit_jpeg_overwrite");
    let out = dir.join("final_status.jpg");
    std::fs::write(&out, b"stale").unwrap();

    write_jpeg(&grey_frame(8, 8), 95, &out).unwrap();
    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn unwritable_destination_is_write_error() {
    let out = PathBuf::from("target")
        .join("unit_jpeg_missing_parent")
        .join("nope")
        .join("final_status.jpg");
    let err = write_jpeg(&grey_frame(2, 2), 95, &out).unwrap_err();
    assert!(matches!(err, YearbarError::Write { .. }));
    assert!(!out.exists());
}

#[test]
fn temp_file_sits_next_to_output() {
    let tmp = temp_sibling(Path::new("out/dir/final_status.jpg"));
    assert_eq!(tmp.parent(), Some(Path::new("out/dir")));
    let name = tmp.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with(".final_status.jpg."));
    assert!(name.ends_with(".tmp"));
}
