#![no_main]
use libfuzzer_sys::fuzz_target;
use varbits::{SymbolIndex, VarBitContainer};

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must decode or fail cleanly.
    if let Ok(c) = VarBitContainer::deserialize(data) {
        assert_eq!(c.positions().iter().copied().max().unwrap_or(0), c.max_value());
    }

    let index = SymbolIndex::from_bytes(data);
    let mut total = 0;
    for (_, container) in &index {
        let back = VarBitContainer::deserialize(&container.serialize()).unwrap();
        assert_eq!(&back, container);
        total += container.len();
    }
    assert_eq!(total, data.len().div_ceil(2));
});
