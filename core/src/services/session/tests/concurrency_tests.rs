//! Concurrent access to a shared session authority

use std::sync::{Arc, Barrier};
use std::thread;

use super::authority_with_clock;

const THREADS: usize = 16;

#[test]
fn test_concurrent_revoke_of_same_token() {
    let (authority, _clock) = authority_with_clock(3600);
    let token = authority.issue("alice").unwrap();
    let barrier = Barrier::new(THREADS);

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                barrier.wait();
                authority.revoke(&token);
            });
        }
    });

    assert_eq!(authority.revoked_count(), 1);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| authority.is_valid(&token, "alice")))
            .collect();

        for handle in handles {
            assert!(!handle.join().unwrap());
        }
    });
}

#[test]
fn test_concurrent_lifecycles_are_independent() {
    let (authority, _clock) = authority_with_clock(3600);
    let authority = Arc::new(authority);
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let authority = Arc::clone(&authority);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                let subject = format!("user-{}", i);
                let token = authority.issue(&subject).unwrap();
                barrier.wait();

                assert!(authority.is_valid(&token, &subject));
                authority.revoke(&token);
                assert!(!authority.is_valid(&token, &subject));
                token
            })
        })
        .collect();

    let tokens: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(authority.revoked_count(), THREADS);
    assert!(tokens.iter().all(|t| authority.is_revoked(t)));
}

#[test]
fn test_readers_never_see_revoked_token_as_valid() {
    let (authority, _clock) = authority_with_clock(3600);
    let token = authority.issue("alice").unwrap();
    authority.revoke(&token);
    let other = authority.issue("bob").unwrap();

    thread::scope(|scope| {
        for _ in 0..THREADS / 2 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(!authority.is_valid(&token, "alice"));
                    assert!(authority.is_valid(&other, "bob"));
                }
            });
        }
        scope.spawn(|| {
            for i in 0..100 {
                authority.revoke(&format!("unrelated-{}", i));
            }
        });
    });

    assert_eq!(authority.revoked_count(), 101);
}
