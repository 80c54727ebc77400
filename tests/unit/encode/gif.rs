use super::*;
use image::AnimationDecoder;

fn cfg(frames: usize) -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 3,
        frame_delay_ms: FRAME_DELAY_MS,
        frames,
    }
}

fn solid(px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: 4,
        height: 3,
        data: px.repeat(12),
        premultiplied: true,
    }
}

#[test]
fn writes_one_gif_frame_per_push() {
    let mut out = Vec::new();
    {
        let mut sink = GifSink::new(&mut out);
        sink.begin(cfg(2)).unwrap();
        sink.push_frame(0, &solid([255, 0, 0, 255])).unwrap();
        sink.push_frame(1, &solid([0, 0, 255, 255])).unwrap();
        sink.end().unwrap();
    }
    assert_eq!(&out[..6], b"GIF89a");
    // Application extension: sub-block of 3 bytes, loop count 0 (forever).
    let ext = out
        .windows(11)
        .position(|w| w == b"NETSCAPE2.0")
        .expect("looping extension");
    assert_eq!(&out[ext + 11..ext + 15], &[0x03, 0x01, 0x00, 0x00]);

    let decoder = image::codecs::gif::GifDecoder::new(std::io::Cursor::new(out)).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), 2);
    let (numer, denom) = frames[0].delay().numer_denom_ms();
    assert_eq!(numer / denom, FRAME_DELAY_MS);
}

#[test]
fn nothing_is_written_before_begin() {
    let mut out = Vec::new();
    {
        let mut sink = GifSink::new(&mut out);
        assert!(sink.push_frame(0, &solid([0, 0, 0, 255])).is_err());
        assert!(sink.end().is_err());
    }
    assert!(out.is_empty());
}

#[test]
fn rejects_mismatched_or_unordered_frames() {
    let mut out = Vec::new();
    let mut sink = GifSink::new(&mut out);
    sink.begin(cfg(2)).unwrap();
    let wrong = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(matches!(
        sink.push_frame(0, &wrong),
        Err(RasterError::InvalidOperation(_))
    ));
    sink.push_frame(1, &solid([0, 0, 0, 255])).unwrap();
    assert!(sink.push_frame(1, &solid([0, 0, 0, 255])).is_err());
}
