#![no_main]

use libfuzzer_sys::fuzz_target;
use octbuf::Buffer;

fuzz_target!(|data: Vec<u8>| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let buf = Buffer::unpack(rest);
    let n = usize::from(selector % 32) + 1;

    // Verify: slices cover the buffer in order
    let parts = buf.slices(n).unwrap();
    for part in &parts {
        assert!(!part.is_empty() && part.len() <= n);
    }
    assert_eq!(Buffer::join(&parts), buf);

    // Verify: each_slice matches slices
    let mut visited = Vec::new();
    buf.each_slice(n, |s| visited.push(s)).unwrap();
    assert_eq!(visited, parts);

    // Verify: slice is clipped, start must be in bounds
    if buf.is_empty() {
        assert!(buf.slice(0, n).is_err());
    } else {
        let i = usize::from(selector) % buf.len();
        let slice = buf.slice(i, n).unwrap();
        assert_eq!(slice.as_slice(), &rest[i..(i + n).min(rest.len())]);
    }
    assert!(buf.slice(buf.len(), n).is_err());

    // Verify: XOR is its own inverse for byte and key operands
    assert_eq!(buf.xor(selector).unwrap().xor(selector).unwrap(), buf);
    if let Some(key) = parts.first() {
        let masked = buf.xor(key).unwrap();
        assert_eq!(masked.len(), buf.len());
        assert_eq!(masked.xor(key).unwrap(), buf);
    }

    // Verify: equal content hashes equal
    let copy = buf.duplicate();
    assert_eq!(copy.fnv_hash(), buf.fnv_hash());
    assert_eq!(copy.digest(), buf.digest());
    assert_eq!(&buf.pack()[..], rest);
});
