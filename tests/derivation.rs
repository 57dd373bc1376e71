// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use logface::ErrorLogger;
use logface::Info;
use logface::InfoLogger;
use logface::Logger;
use logface::capability::EntryKind;
use logface::capability::Recorder;
use logface::kv::Fields;

fn rendered(fields: &Fields) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn pairs(kvs: &[(&str, &str)]) -> Vec<(String, String)> {
    kvs.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn chained_fields_merge_last_write_wins() {
    let recorder = Arc::new(Recorder::default());
    let root = Info::new(recorder.clone()).with_fields([("svc", "api"), ("zone", "a")]);

    let derived = root
        .with_fields([("zone", "b"), ("req", "1")])
        .with_fields([("req", "2")]);

    assert_eq!(
        rendered(derived.fields()),
        pairs(&[("req", "2"), ("svc", "api"), ("zone", "b")])
    );
    assert_eq!(
        rendered(root.fields()),
        pairs(&[("svc", "api"), ("zone", "a")])
    );

    derived.info(&[&"hit"]);
    let entries = recorder.take();
    assert_eq!(
        rendered(&entries[0].fields),
        pairs(&[("req", "2"), ("svc", "api"), ("zone", "b")])
    );
}

#[test]
fn chained_prefixes_concatenate() {
    let recorder = Arc::new(Recorder::default());
    let base = Info::new(recorder.clone()).with_prefix("E:");

    let derived = base.with_prefix("P:").with_prefix("Q:");
    assert_eq!(derived.prefix(), "E:P:Q:");
    assert_eq!(base.prefix(), "E:");

    derived.info(&[&"m"]);
    base.info(&[&"m"]);
    let messages: Vec<_> = recorder.take().into_iter().map(|e| e.message).collect();
    assert_eq!(messages, ["E:P:Q:m", "E:m"]);
}

#[test]
fn sibling_levels_are_independent() {
    let recorder = Arc::new(Recorder::default());
    let root = Info::new(recorder.clone());

    let low = root.v(1);
    let high = root.v(9);
    low.info(&[&"low"]);
    high.info(&[&"high"]);
    low.info(&[&"low again"]);

    let levels: Vec<_> = recorder.take().iter().map(|e| e.level()).collect();
    assert_eq!(levels, [Some(1), Some(9), Some(1)]);
    assert_eq!(root.level(), 0);
}

#[test]
fn error_uses_context_but_not_level() {
    let recorder = Arc::new(Recorder::default());
    let log = Logger::from_backend(recorder.clone())
        .with_fields([("user", "bob")])
        .with_prefix("auth: ");

    let _verbose = log.v(7);
    log.error(&[&"x"]);

    let entries = recorder.take();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, EntryKind::Error);
    assert_eq!(entries[0].message, "auth: x");
    assert_eq!(rendered(&entries[0].fields), pairs(&[("user", "bob")]));
}

#[test]
fn split_backends_keep_derived_context() {
    let infos = Arc::new(Recorder::default());
    let errors = Arc::new(Recorder::default());
    let log = Logger::new(infos.clone(), errors.clone())
        .with_fields([("job", "sync")])
        .with_prefix("worker: ")
        .with_fields([("try", "2")]);

    log.v(1).info(&[&"started"]);
    log.error(&[&"gave", &"up"]);

    let infos = infos.take();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].kind, EntryKind::Info(1));
    assert_eq!(infos[0].message, "worker: started");

    let errors = errors.take();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, EntryKind::Error);
    assert_eq!(errors[0].message, "worker: gave up");
    assert_eq!(
        rendered(&errors[0].fields),
        pairs(&[("job", "sync"), ("try", "2")])
    );
}

#[test]
fn derivations_never_reach_the_backend() {
    let recorder = Arc::new(Recorder::default());
    let log = Logger::from_backend(recorder.clone());

    let _ = log.with_fields([("a", 1)]).with_prefix("p").v(3).with_prefix("q");
    let _ = log.as_info().v(2).with_fields([("b", 2)]);
    assert!(recorder.is_empty());
}

#[test]
fn identical_derivations_are_indistinguishable() {
    let recorder = Arc::new(Recorder::default());
    let root = Logger::from_backend(recorder.clone());

    let derive = |log: &Logger| {
        log.with_prefix("a/")
            .with_fields([("k", 1), ("j", 2)])
            .with_fields([("k", 3)])
            .v(2)
    };
    let first = derive(&root);
    let second = derive(&root);

    assert_eq!(first.level(), second.level());
    assert_eq!(first.prefix(), second.prefix());
    assert_eq!(rendered(first.fields()), rendered(second.fields()));

    logface::infof!(first, "n={}", 1);
    logface::infof!(second, "n={}", 1);
    let lines: Vec<_> = recorder
        .take()
        .iter()
        .map(|e| e.to_line().unwrap())
        .collect();
    assert_eq!(lines[0], lines[1]);
    insta::assert_snapshot!(lines[0], @"V2 a/n=1 j=2 k=3");
}

#[test]
fn macros_match_methods() {
    let recorder = Arc::new(Recorder::default());
    let log = Logger::from_backend(recorder.clone());

    logface::info!(log, "a", "b");
    logface::infof!(log, "count={}", 5);
    logface::error!(log, "failed", 404);
    logface::errorf!(log, "failed with {code}", code = 500);
    logface::info!(log);

    let messages: Vec<_> = recorder.take().into_iter().map(|e| e.message).collect();
    assert_eq!(
        messages,
        ["a b", "count=5", "failed 404", "failed with 500", ""]
    );
}

#[derive(Debug, Default)]
struct InfoOnly(Recorder);

impl InfoLogger for InfoOnly {
    fn log_info(&self, level: i32, fields: &Fields, msg: &str) {
        self.0.log_info(level, fields, msg);
    }
}

#[test]
fn info_only_backend_is_enough_for_info() {
    let backend = Arc::new(InfoOnly::default());
    let log = Info::new(backend.clone());

    log.with_prefix("> ").info(&[&"works"]);
    assert_eq!(backend.0.take()[0].message, "> works");
}

#[test]
fn backends_accept_static_references() {
    static RECORDER: Recorder = Recorder::new();

    let log = Logger::new(Arc::new(&RECORDER), Arc::new(&RECORDER));
    log.info(&[&"i"]);
    log.error(&[&"e"]);
    assert_eq!(RECORDER.take().len(), 2);

    let boxed: Box<dyn ErrorLogger> = Box::new(Recorder::default());
    boxed.log_error(&Fields::new(), "through a box");
}

#[test]
fn emitters_are_shared_across_threads() {
    let recorder = Arc::new(Recorder::default());
    let log = Logger::from_backend(recorder.clone()).with_fields([("worker", "pool")]);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let log = log.clone();
            std::thread::spawn(move || {
                logface::infof!(log.v(i), "worker {} done", i);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut messages: Vec<_> = recorder.take().into_iter().map(|e| e.message).collect();
    messages.sort();
    assert_eq!(
        messages,
        ["worker 0 done", "worker 1 done", "worker 2 done", "worker 3 done"]
    );
}
