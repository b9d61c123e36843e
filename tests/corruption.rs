//! Corruption, truncation and compatibility-gate tests
//!
//! Saved files are mutated byte-by-byte to verify that every class of
//! damage surfaces as the right typed error instead of being silently
//! accepted.

use parksave::{
    payload_digest, ChunkEntry, ChunkKind, ContentRequirement, Cursor, Header, ParkSave,
    ParkState, SaveError, TileMap, TARGET_VERSION,
};

// Fixed header field offsets (see the header wire layout).
const MAGIC_OFFSET: usize = 0;
const MIN_VERSION_OFFSET: usize = 8;
const COMPRESSION_OFFSET: usize = 24;
const HEADER_LEN: usize = 48;
const ENTRY_LEN: usize = 20;

fn valid_state() -> ParkState {
    ParkState {
        catalog: vec![ContentRequirement {
            type_tag: 1,
            identifier: "official.terrain.grass".into(),
            version: "1.0".into(),
        }],
        tiles: TileMap::new(3, 3),
        ..Default::default()
    }
}

fn valid_bytes() -> Vec<u8> {
    ParkSave::to_bytes(&valid_state()).unwrap()
}

fn payload_start(bytes: &[u8]) -> usize {
    let chunk_count = u32::from_le_bytes(bytes[12..16].try_into().unwrap()) as usize;
    HEADER_LEN + chunk_count * ENTRY_LEN
}

/// Assemble a file from raw (kind, payload) chunks, bypassing the encoder.
fn build_file(chunks: &[(u32, Vec<u8>)]) -> Vec<u8> {
    let mut payload = Vec::new();
    let mut entries = Vec::new();
    for (kind, bytes) in chunks {
        entries.push(ChunkEntry {
            kind: *kind,
            offset: payload.len() as u64,
            length: bytes.len() as u64,
        });
        payload.extend_from_slice(bytes);
    }

    let mut header = Header::new();
    header.chunk_count = entries.len() as u32;
    header.uncompressed_size = payload.len() as u64;
    header.digest = payload_digest(&payload);

    let mut out = Cursor::new();
    out.write_bytes(&header.to_bytes());
    for entry in &entries {
        entry.write_to(&mut out);
    }
    out.write_bytes(&payload);
    out.into_bytes()
}

fn catalog_chunk() -> Vec<u8> {
    let mut cur = Cursor::new();
    parksave::write_array(
        &mut cur,
        &[("official.terrain.grass", "1.0")],
        |c, (id, ver)| {
            c.write(1u32);
            c.write_string(id);
            c.write_string(ver);
            Ok(())
        },
    )
    .unwrap();
    cur.into_bytes()
}

fn scenario_chunk() -> Vec<u8> {
    let mut cur = Cursor::new();
    cur.write_string("Bare");
    cur.write_string("");
    cur.write(0u32); // objective kind
    cur.write(0u16); // objective year
    cur.write(0u32); // objective guests
    cur.write(0i64); // objective value
    cur.write(0i64); // starting funds
    cur.into_bytes()
}

fn general_chunk() -> Vec<u8> {
    let mut cur = Cursor::new();
    cur.write(0u64); // ticks
    cur.write(0u32); // elapsed months
    cur.write(0u32); // rng seed 0
    cur.write(0u32); // rng seed 1
    cur.write(0i64); // cash
    cur.write(0i64); // loan
    cur.write(0i64); // max loan
    cur.write(0u16); // entrance fee
    cur.write(0u16); // park rating
    cur.write(0u32); // guest count
    cur.write(0u64); // flags
    cur.into_bytes()
}

fn tiles_chunk(width: u32, height: u32) -> Vec<u8> {
    let mut cur = Cursor::new();
    cur.write(width);
    cur.write(height);
    let elements = vec![[0u8; 8]; (width * height) as usize];
    parksave::write_array(&mut cur, &elements, |c, el| {
        c.write_bytes(el);
        Ok(())
    })
    .unwrap();
    cur.into_bytes()
}

#[test]
fn flipped_payload_byte_is_corrupt() {
    let bytes = valid_bytes();
    let start = payload_start(&bytes);

    let mut mutated = bytes.clone();
    mutated[start] ^= 0x01;

    assert!(matches!(
        ParkSave::from_bytes(&mutated),
        Err(SaveError::CorruptFile(_))
    ));

    // Last payload byte too.
    let mut mutated = bytes;
    let last = mutated.len() - 1;
    mutated[last] ^= 0x80;
    assert!(matches!(
        ParkSave::from_bytes(&mutated),
        Err(SaveError::CorruptFile(_))
    ));
}

#[test]
fn bad_magic_is_rejected() {
    let mut bytes = valid_bytes();
    bytes[MAGIC_OFFSET..MAGIC_OFFSET + 4].copy_from_slice(b"XXXX");
    assert!(matches!(
        ParkSave::from_bytes(&bytes),
        Err(SaveError::BadMagic)
    ));
}

#[test]
fn version_gate_rejects_newer_min_version() {
    let mut bytes = valid_bytes();
    let newer = TARGET_VERSION + 1;
    bytes[MIN_VERSION_OFFSET..MIN_VERSION_OFFSET + 4].copy_from_slice(&newer.to_le_bytes());

    match ParkSave::from_bytes(&bytes) {
        Err(SaveError::UnsupportedVersion { file_min, reader }) => {
            assert_eq!(file_min, newer);
            assert_eq!(reader, TARGET_VERSION);
        }
        other => panic!("expected UnsupportedVersion, got {:?}", other.err()),
    }
}

#[test]
fn reserved_compression_is_rejected() {
    let mut bytes = valid_bytes();
    bytes[COMPRESSION_OFFSET..COMPRESSION_OFFSET + 4].copy_from_slice(&1u32.to_le_bytes());
    assert!(matches!(
        ParkSave::from_bytes(&bytes),
        Err(SaveError::UnsupportedCompression(1))
    ));
}

#[test]
fn truncated_files_are_rejected() {
    let bytes = valid_bytes();

    // Mid-header, mid-directory, mid-payload.
    for len in [10, HEADER_LEN + 5, bytes.len() - 3] {
        let result = ParkSave::from_bytes(&bytes[..len]);
        assert!(
            matches!(result, Err(SaveError::TruncatedInput)),
            "length {len} should be truncation"
        );
    }
}

#[test]
fn empty_input_is_truncation() {
    assert!(matches!(
        ParkSave::from_bytes(&[]),
        Err(SaveError::TruncatedInput)
    ));
}

#[test]
fn missing_tiles_chunk_fails_import_only() {
    let bytes = build_file(&[
        (ChunkKind::ContentCatalog as u32, catalog_chunk()),
        (ChunkKind::Scenario as u32, scenario_chunk()),
        (ChunkKind::General as u32, general_chunk()),
    ]);

    // Load succeeds: the catalog is present and the file is intact.
    let mut container = ParkSave::from_bytes(&bytes).unwrap();
    assert_eq!(container.content_requirements().len(), 1);

    // Import fails before touching any state.
    assert!(matches!(
        container.import(),
        Err(SaveError::MissingChunk(ChunkKind::Tiles))
    ));
}

#[test]
fn missing_catalog_chunk_fails_load() {
    let bytes = build_file(&[
        (ChunkKind::Scenario as u32, scenario_chunk()),
        (ChunkKind::General as u32, general_chunk()),
        (ChunkKind::Tiles as u32, tiles_chunk(2, 2)),
    ]);
    assert!(matches!(
        ParkSave::from_bytes(&bytes),
        Err(SaveError::MissingChunk(ChunkKind::ContentCatalog))
    ));
}

#[test]
fn unknown_chunk_kinds_are_tolerated() {
    let bytes = build_file(&[
        (ChunkKind::ContentCatalog as u32, catalog_chunk()),
        (ChunkKind::Scenario as u32, scenario_chunk()),
        (ChunkKind::General as u32, general_chunk()),
        (ChunkKind::Tiles as u32, tiles_chunk(2, 2)),
        (0x77, b"from a future format version".to_vec()),
    ]);

    let mut container = ParkSave::from_bytes(&bytes).unwrap();
    assert_eq!(container.directory().len(), 5);
    let state = container.import().unwrap();
    assert_eq!(state.tiles.width, 2);
}

#[test]
fn chunk_range_outside_payload_is_corrupt() {
    let mut bytes = build_file(&[
        (ChunkKind::ContentCatalog as u32, catalog_chunk()),
        (ChunkKind::Scenario as u32, scenario_chunk()),
        (ChunkKind::General as u32, general_chunk()),
        (ChunkKind::Tiles as u32, tiles_chunk(2, 2)),
    ]);

    // Inflate the first directory entry's length field past the payload.
    let length_offset = HEADER_LEN + 12;
    bytes[length_offset..length_offset + 8].copy_from_slice(&u64::MAX.to_le_bytes());

    assert!(matches!(
        ParkSave::from_bytes(&bytes),
        Err(SaveError::CorruptFile(_))
    ));
}

#[test]
fn failed_save_leaves_no_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing_parent = dir.path().join("no-such-dir").join("park.sav");

    let result = ParkSave::save(&valid_state(), &missing_parent);
    assert!(matches!(result, Err(SaveError::SaveIo(_))));
    assert!(!missing_parent.exists());
}
