//! Marker parents (equality, hashing, serialization, concurrency) carry no
//! dependency semantics: an adapter whose only non-target parents are
//! markers gets the trivial stack.

use adapter_stack::prelude::*;

trait Codec {
    fn encode(&self, value: u32) -> Vec<u8>;
}

// Every extra parent here is a structural marker; none may demand an
// `XStack` trait that does not exist.
#[adapter(Codec::Stack)]
trait JsonCodec: Codec + Clone + Send + Sync + PartialEq {}

#[derive(Clone, PartialEq)]
struct FixtureCodec;

impl Codec for FixtureCodec {
    fn encode(&self, value: u32) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }
}

impl JsonCodec for FixtureCodec {}

fn encode_via_stack<C: JsonCodecStack>(codec: &C) -> Vec<u8> {
    codec.encode(7)
}

#[test]
fn marker_only_parents_yield_the_trivial_stack() {
    // Compiles at all only because the markers were filtered out: there is
    // no CloneStack or SendStack anywhere in this crate.
    assert_eq!(encode_via_stack(&FixtureCodec), vec![0, 0, 0, 7]);
}

#[test]
fn target_only_parent_list_needs_no_dependencies() {
    trait Store {
        fn get(&self) -> u32;
    }

    #[adapter(Store::Stack)]
    trait MemoryStore: Store {}

    struct Fixture;
    impl Store for Fixture {
        fn get(&self) -> u32 {
            42
        }
    }
    impl MemoryStore for Fixture {}

    fn read<S: MemoryStoreStack>(store: &S) -> u32 {
        store.get()
    }
    assert_eq!(read(&Fixture), 42);
}
