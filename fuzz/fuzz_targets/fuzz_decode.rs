#![no_main]
use bitsample::{DecodeRequest, Limits, PixelFormat, QoiCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let codec = QoiCodec;
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Limits::default()
    };

    // Probe and full pipeline at a few factors — must never panic
    let _ = DecodeRequest::new(&codec, data).probe();
    for sample_size in [0u32, 1, 2, 7] {
        let _ = DecodeRequest::new(&codec, data)
            .with_sample_size(sample_size)
            .with_limits(limits.clone())
            .decode(enough::Unstoppable);
        let _ = DecodeRequest::new(&codec, data)
            .with_format(PixelFormat::Rgb565)
            .with_sample_size(sample_size)
            .with_limits(limits.clone())
            .decode(enough::Unstoppable);
    }
});
