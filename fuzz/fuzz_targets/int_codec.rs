#![no_main]

use libfuzzer_sys::fuzz_target;
use octbuf::{BigUint, Buffer};

fuzz_target!(|input: (u128, u8)| {
    let (k, width) = input;
    let n = usize::from(width % 24);

    // Verify: encoding succeeds exactly when k fits in n bytes
    let fits = n >= 16 || k >> (8 * n) == 0;
    match Buffer::from_int(k, n) {
        Ok(buf) => {
            assert!(fits);
            assert_eq!(buf.len(), n);
            assert_eq!(buf.to_u128().unwrap(), k);
            assert_eq!(buf.to_int(), BigUint::from(k));

            // Verify: successor adds one modulo 256^n
            let next = buf.succ();
            assert_eq!(next.len(), n);
            let wrapped = buf.iter().all(|b| b == 0xFF);
            if wrapped {
                assert!(next.iter().all(|b| b == 0x00));
            } else if let Some(expected) = k.checked_add(1) {
                assert_eq!(next.to_u128().unwrap(), expected);
            } else {
                // Wider than 16 bytes: the counter moved past u128::MAX.
                assert!(next.to_u128().is_err());
                assert_eq!(next.to_int(), BigUint::from(k) + 1u8);
            }
        }
        Err(_) => assert!(!fits),
    }
});
