use qty_core::Engine;
use std::thread;

#[test]
fn test_shared_engine_across_threads() {
    let engine = Engine::new();
    let expressions = ["1 km", "3 ft", "2 mi", "12 in", "5 cm"];

    let results: Vec<Vec<f64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    expressions
                        .iter()
                        .map(|expr| {
                            let q = engine.parse(expr).unwrap();
                            engine.to(&q, "m").unwrap().scalar()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(engine.cache().stats().targets, 1);
}

#[test]
fn test_cloned_engines_share_caches() {
    let engine = Engine::new();
    let clone = engine.clone();
    thread::spawn(move || {
        clone.parse("1 km").unwrap();
    })
    .join()
    .unwrap();
    assert!(engine.cache().stats().parsed_units > 0);
}

#[test]
fn test_clear_cache_keeps_results() {
    let engine = Engine::new();
    let before = engine.parse("90 km/h").unwrap();
    let converted = engine.to(&before, "m/s").unwrap();
    engine.cache().clear();
    assert!(engine.cache().is_empty());
    let again = engine.to(&engine.parse("90 km/h").unwrap(), "m/s").unwrap();
    assert_eq!(again.scalar(), converted.scalar());
}
