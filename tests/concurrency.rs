type Result = std::result::Result<(), Box<dyn std::error::Error>>;
use std::sync::Arc;
use std::thread;
use test_harness::test;
use trieroute::*;

fn harness<F>(test: F) -> Result
where
    F: FnOnce() -> Result,
{
    let _ = env_logger::builder().is_test(true).try_init();
    test()
}

fn lookup(router: &Router<usize>, path: &str) -> Option<(usize, Vec<String>)> {
    router.lookup(Method::Get, path).found().map(|m| {
        let values = m.captures().iter().map(|c| c.value().to_string()).collect();
        (*m, values)
    })
}

#[test(harness = harness)]
fn parallel_lookups_match_sequential_ones() -> Result {
    let mut router = Router::new();
    for i in 0..1000 {
        router.get(format!("/resource{i}/:id"), i)?;
        router.get(format!("/resource{i}/:id/items/:item"), 1000 + i)?;
    }
    router.get("/*rest", usize::MAX)?;

    let paths: Vec<String> = (0..100)
        .map(|i| match i % 4 {
            0 => format!("/resource{}/{i}", i * 7),
            1 => format!("/resource{}/{i}/items/x{i}", i * 3),
            2 => format!("/missing/{i}"),
            _ => format!("/resource{}/{i}/items", i * 5),
        })
        .collect();

    let sequential: Vec<_> = paths.iter().map(|path| lookup(&router, path)).collect();

    let router = &router;
    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || lookup(router, path)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(parallel, sequential);
    assert_eq!(sequential[0], Some((0, vec!["0".into()])));
    assert_eq!(
        sequential[1],
        Some((1003, vec!["1".into(), "x1".into()]))
    );
    assert_eq!(sequential[2], Some((usize::MAX, vec!["missing/2".into()])));
    assert_eq!(
        sequential[3],
        Some((usize::MAX, vec!["resource15/3/items".into()]))
    );

    Ok(())
}

#[test(harness = harness)]
fn readers_only_ever_see_whole_tables() -> Result {
    let live = LiveRouter::default();
    live.register(Method::Get, "/seed", 0)?;

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut last = 0;
                for _ in 0..500 {
                    let router = live.load();
                    let len = router.len();
                    assert!(len >= last);
                    assert!(router.lookup(Method::Get, "/seed").is_found());
                    if len > 1 {
                        let newest = format!("/item/{}", len - 1);
                        assert_eq!(lookup(&router, &newest), Some((len - 1, vec![])));
                    }
                    last = len;
                }
            });
        }

        scope.spawn(|| {
            for i in 1..=50 {
                live.register(Method::Get, format!("/item/{i}"), i).unwrap();
            }
        });
    });

    assert_eq!(live.load().len(), 51);

    Ok(())
}

#[test(harness = harness)]
fn loaded_tables_are_snapshots() -> Result {
    let live = LiveRouter::from({
        let mut router = Router::new();
        router.get("/user/:name", 1)?;
        router
    });

    let before = live.load();
    live.register(Method::Post, "/user/:name", 2)?;
    assert!(matches!(
        before.lookup(Method::Post, "/user/x"),
        Lookup::MethodNotAllowed(_)
    ));
    assert!(live.load().lookup(Method::Post, "/user/x").is_found());

    let current = live.load();
    assert!(matches!(
        live.register(Method::Get, "/user/:id", 3),
        Err(RouteError::AmbiguousParam { .. })
    ));
    assert!(Arc::ptr_eq(&current, &live.load()));

    let replaced = live.replace(Router::new());
    assert!(Arc::ptr_eq(&current, &replaced));
    assert!(live.load().is_empty());
    assert_eq!(before.len(), 1);

    Ok(())
}
