//! Integration tests against a captured firmware frame
//!
//! The fixture is a self-check response recorded from a live sensor:
//! head 0xA0, command 0x02, little-endian length field, additive checksum
//! trailer.

use sensorlink::bytes::{conversions, integrity, text};
use sensorlink::{byte_order, frame, set_byte_order, ByteOrder};

const SAMPLE_FRAME: [u8; 23] = [
    0xA0, 0x02, 0x17, 0x00, 0x02, 0x00, 0x00, 0x15, 0x04, 0x10, 0x10, 0x16, 0x00, 0x01, 0x01,
    0x15, 0x04, 0x10, 0x11, 0x16, 0x00, 0x00, 0xA4,
];

#[test]
fn captured_frame_checksum_matches_trailer() {
    let body = &SAMPLE_FRAME[..SAMPLE_FRAME.len() - 1];
    assert_eq!(integrity::checksum8(body).unwrap(), 0xA4);
    assert!(frame::verify(&SAMPLE_FRAME));
}

#[test]
fn captured_frame_crc32_is_stable() {
    let body = &SAMPLE_FRAME[..SAMPLE_FRAME.len() - 1];
    assert_eq!(integrity::crc32(body), 0xFA94_73CD);
}

#[test]
fn captured_frame_unpacks() {
    let payload = frame::unpack(&SAMPLE_FRAME, 0xA0, 0x02, SAMPLE_FRAME.len()).unwrap();
    assert_eq!(payload.len(), SAMPLE_FRAME.len() - frame::FRAME_OVERHEAD);
    assert_eq!(payload[0], 0x02);

    // the length field is a little-endian i16 covering the whole frame
    let len = conversions::decode_i16(&SAMPLE_FRAME, 2, ByteOrder::LittleEndian).unwrap();
    assert_eq!(len as usize, SAMPLE_FRAME.len());
}

#[test]
fn repacking_the_payload_reproduces_the_capture() {
    let payload = frame::unpack(&SAMPLE_FRAME, 0xA0, 0x02, SAMPLE_FRAME.len()).unwrap();
    let rebuilt = frame::pack(0xA0, 0x02, payload, ByteOrder::LittleEndian).unwrap();
    assert_eq!(rebuilt, SAMPLE_FRAME);
}

#[test]
fn frame_dump_formats() {
    let short = &SAMPLE_FRAME[..2];
    assert_eq!(text::hex_string(short), "[0xA0, 0x02]");
    assert_eq!(text::hex_string_indexed(short), "[0 - 0xA0, 1 - 0x02]");
    assert_eq!(text::hex_digest(short), "A002");
    assert_eq!(text::parse_hex_digest("A002").unwrap(), short);
}

#[test]
fn waveform_payload_layout_matches_processing_boundary() {
    // acceleration samples travel as i16 pairs; the DSP boundary takes f64
    let samples = conversions::decode_i16_array(&SAMPLE_FRAME[4..22], ByteOrder::LittleEndian);
    assert_eq!(samples.len(), 9);
    let as_f64: Vec<f64> = samples.iter().map(|s| f64::from(*s)).collect();
    assert_eq!(as_f64.len(), samples.len());
}

#[test]
fn process_wide_byte_order_is_atomic_replace() {
    // default at process start
    assert_eq!(byte_order(), ByteOrder::LittleEndian);

    set_byte_order(Some(ByteOrder::BigEndian));
    assert_eq!(byte_order(), ByteOrder::BigEndian);
    assert_eq!(
        conversions::decode_i16(&SAMPLE_FRAME, 2, byte_order()).unwrap(),
        0x1700
    );

    // unset sentinel leaves the setting untouched
    set_byte_order(None);
    assert_eq!(byte_order(), ByteOrder::BigEndian);

    set_byte_order(Some(ByteOrder::LittleEndian));
    assert_eq!(byte_order(), ByteOrder::LittleEndian);
}
