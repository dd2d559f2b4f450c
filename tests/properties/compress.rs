//! Property tests for compression and rendering.

use std::io::Read;

use flate2::read::GzDecoder;
use proptest::prelude::*;

use progmem::{encode_assets, render, Compressor, EmitOptions, EncodeOptions, SourceFile, SourceTree};

fn tree(files: &[(String, Vec<u8>)]) -> SourceTree {
    SourceTree::new(
        "web",
        files
            .iter()
            .map(|(p, b)| SourceFile::new(p.clone(), b.clone()))
            .collect(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decompressing an array yields the original file bytes.
    #[test]
    fn property_gzip_round_trips(
        bytes in proptest::collection::vec(any::<u8>(), 0..4096),
        level in 0u32..=9
    ) {
        let compressor = Compressor::new(level).unwrap();
        let compressed = compressor.compress(&bytes).unwrap();

        let mut out = Vec::new();
        GzDecoder::new(compressed.as_slice()).read_to_end(&mut out).unwrap();
        prop_assert_eq!(out, bytes);
    }

    /// PROPERTY: same input, same header, whether compressed in parallel or not.
    #[test]
    fn property_render_is_deterministic(
        contents in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..512), 0..6)
    ) {
        let files: Vec<(String, Vec<u8>)> = contents
            .into_iter()
            .enumerate()
            .map(|(i, b)| (format!("dir{}/file{i}.bin", i % 2), b))
            .collect();
        let t = tree(&files);

        let parallel = EncodeOptions { parallel: true, ..EncodeOptions::default() };
        let serial = EncodeOptions::default();

        let a = render(&encode_assets(&t, &parallel).unwrap(), &EmitOptions::default());
        let b = render(&encode_assets(&t, &serial).unwrap(), &EmitOptions::default());
        let c = render(&encode_assets(&t, &parallel).unwrap(), &EmitOptions::default());

        prop_assert_eq!(a.as_str(), b.as_str());
        prop_assert_eq!(a.as_str(), c.as_str());
        prop_assert_eq!(a.asset_count(), files.len());
    }

    /// PROPERTY: every array is followed by a length constant that matches it.
    #[test]
    fn property_length_matches_array(
        bytes in proptest::collection::vec(any::<u8>(), 1..300),
        row_width in 1usize..40
    ) {
        let t = tree(&[("blob.bin".to_string(), bytes)]);
        let records = encode_assets(&t, &EncodeOptions::default()).unwrap();
        let header = render(&records, &EmitOptions::new(row_width).unwrap()).into_string();

        let body_start = header.find("PROGMEM = {\n").unwrap() + "PROGMEM = {\n".len();
        let body_end = header.find("};").unwrap();
        let body = &header[body_start..body_end];

        prop_assert_eq!(body.matches("0x").count(), records[0].compressed_len());
        prop_assert!(body.lines().all(|l| l.matches("0x").count() <= row_width));
        let len_line = format!("const size_t blob_bin_gz_len = {};\n", records[0].compressed_len());
        prop_assert!(header.contains(&len_line));
    }
}
