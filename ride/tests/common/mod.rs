#![allow(dead_code)]

use futures::{FutureExt, future::BoxFuture};
use ride::{MethodName, MethodTable, Slot, Target, Wrapped, testing::CallLog};
use std::sync::{Arc, LazyLock};

// ============================================================================
// Test Target
// ============================================================================

pub type Entry = (&'static str, Option<i32>);

#[derive(Debug, PartialEq)]
pub struct Negative(pub i32);

pub const RUN: MethodName<TestClass, (i32,), String> = MethodName::new("run");
pub const FAIL: MethodName<TestClass, (i32,), String> = MethodName::new("fail");
pub const TRY_RUN: MethodName<TestClass, (i32,), Result<String, Negative>> =
    MethodName::new("try_run");
pub const FETCH: MethodName<TestClass, (i32,), BoxFuture<'static, i32>> = MethodName::new("fetch");

pub type RunSlot = Slot<TestClass, (i32,), String>;
pub type RunWrapped<'a> = Wrapped<'a, TestClass, (i32,), String>;

/// Methods shared by every `TestClass`, like a class prototype.
pub static PROTOTYPE: LazyLock<Arc<MethodTable<TestClass>>> = LazyLock::new(|| {
    Arc::new(
        MethodTable::new()
            .with(RUN, |this: &TestClass, (a,): (i32,)| {
                this.record("original", Some(a));
                "original".to_string()
            })
            .with(FAIL, |this: &TestClass, (a,): (i32,)| -> String {
                this.record("fail", Some(a));
                panic!("original failed with {a}");
            })
            .with(TRY_RUN, |this: &TestClass, (a,): (i32,)| {
                this.record("original", Some(a));
                if a < 0 {
                    Err(Negative(a))
                } else {
                    Ok("original".to_string())
                }
            })
            .with(FETCH, |this: &TestClass, (a,): (i32,)| {
                let log = this.sequence.clone();
                async move {
                    log.record(("fetched", Some(a)));
                    a
                }
                .boxed()
            }),
    )
});

pub struct TestClass {
    pub sequence: CallLog<Entry>,
    methods: MethodTable<TestClass>,
}

impl TestClass {
    pub fn new() -> Self {
        Self {
            sequence: CallLog::new(),
            methods: MethodTable::with_prototype(Arc::clone(&PROTOTYPE)),
        }
    }

    pub fn run(&self, a: i32) -> String {
        self.invoke(RUN, (a,)).expect("run is defined on the prototype")
    }

    pub fn record(&self, tag: &'static str, a: Option<i32>) {
        self.sequence.record((tag, a));
    }
}

impl Target for TestClass {
    fn methods(&self) -> &MethodTable<Self> {
        &self.methods
    }

    fn methods_mut(&mut self) -> &mut MethodTable<Self> {
        &mut self.methods
    }
}
