//! Checks the events the library emits, using a layer that records them.

use relation::*;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
  level: Level,
  property: Option<String>,
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

struct PropertyField(Option<String>);

impl Visit for PropertyField {
  fn record_str(&mut self, field: &Field, value: &str) {
    if field.name() == "property" {
      self.0 = Some(value.to_string());
    }
  }
  fn record_debug(&mut self, _: &Field, _: &dyn fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for Recorder {
  fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
    let mut property = PropertyField(None);
    event.record(&mut property);
    if let Ok(mut events) = self.0.lock() {
      events.push(Recorded {
        level: *event.metadata().level(),
        property: property.0,
      });
    }
  }
}

impl Recorder {
  fn run(&self, f: impl FnOnce()) -> Vec<Recorded> {
    let subscriber = tracing_subscriber::registry().with(self.clone());
    tracing::subscriber::with_default(subscriber, f);
    self.0.lock().map(|events| events.clone()).unwrap_or_default()
  }
}

#[test]
fn rejected_try_calls_do_not_log_errors() {
  let u: HashSet<char> = "ab".chars().collect();
  let events = Recorder::default().run(|| {
    let mut b = MaterializedRelation::new(&u);
    assert!(b.try_add_relation(&'a', &'z').is_err());
    assert!(b.try_remove_relation(&'z', &'a').is_err());
    assert!(b.try_contains_relation(&'a', &'z').is_err());
  });
  assert_eq!(events.iter().filter(|e| e.level == Level::DEBUG).count(), 3);
  assert!(events.iter().all(|e| e.level != Level::ERROR));
}

#[test]
fn panicking_calls_log_an_error() {
  let u: HashSet<char> = "ab".chars().collect();
  let events = Recorder::default().run(|| {
    let outcome = std::panic::catch_unwind(|| {
      let mut b = MaterializedRelation::new(&u);
      b.add_relation(&'a', &'z');
    });
    assert!(outcome.is_err());
  });
  assert_eq!(events.iter().filter(|e| e.level == Level::ERROR).count(), 1);
}

#[test]
fn failed_checks_name_the_failing_property() {
  let u: HashSet<char> = "abc".chars().collect();
  let recorder = Recorder::default();

  let events = recorder.run(|| {
    let mut incomplete = MaterializedRelation::new(&u);
    incomplete.add_relation(&'a', &'b');
    assert!(!transitive(&incomplete));
  });
  let properties: Vec<_> = events.iter().filter_map(|e| e.property.clone()).collect();
  assert_eq!(properties, vec!["complete".to_string()]);

  let events = Recorder::default().run(|| {
    let mut chain = MaterializedRelation::new(&u);
    chain.add_relation(&'a', &'b');
    chain.add_relation(&'b', &'c');
    assert!(!chains_compose(&chain));
  });
  let properties: Vec<_> = events.iter().filter_map(|e| e.property.clone()).collect();
  assert_eq!(properties, vec!["chains_compose".to_string()]);
}
