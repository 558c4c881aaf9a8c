use criterion::{criterion_group, criterion_main, Criterion};
use http::StatusCode;
use std::alloc::{GlobalAlloc, Layout, System};
use std::collections::BTreeMap;
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};

use trieroute::{
    handler_fn, Discard, Handler, Method, Outcome, Request, ResponseWriter, Router,
};

struct Counting;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATED.fetch_add(layout.size(), Relaxed);
        ALLOCATIONS.fetch_add(1, Relaxed);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        ALLOCATED.fetch_sub(layout.size(), Relaxed);
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

/// prints the heap bytes still held once `load` returns
fn calc_mem<R>(name: &str, load: impl FnOnce() -> R) -> R {
    let before = ALLOCATED.load(Relaxed);
    let loaded = load();
    let after = ALLOCATED.load(Relaxed);
    println!("   {name}: {} Bytes", after.saturating_sub(before));
    loaded
}

fn report_allocs(name: &str, mut request: impl FnMut()) {
    const RUNS: usize = 1_000;
    request();

    let before = ALLOCATIONS.load(Relaxed);
    for _ in 0..RUNS {
        request();
    }
    let after = ALLOCATIONS.load(Relaxed);
    println!("   {name}: {:.2} allocs/op", (after - before) as f64 / RUNS as f64);
}

type HandlerFunc = fn(&Request<'_, '_>, &mut dyn ResponseWriter);

fn handle(_: &Request<'_, '_>, _: &mut dyn ResponseWriter) {}

fn handle_write(request: &Request<'_, '_>, response: &mut dyn ResponseWriter) {
    response.write_body(request.param("name").unwrap_or_default().as_bytes());
}

fn load_trieroute(routes: &[(Method, &str)], handler: HandlerFunc) -> Router<Box<dyn Handler>> {
    let mut router: Router<Box<dyn Handler>> = Router::new();
    for (method, pattern) in routes {
        router
            .register(*method, *pattern, Box::new(handler_fn(handler)))
            .unwrap();
    }
    router
}

type BaselineFunc = fn(&routefinder::Captures<'_, '_>, &mut Discard);

fn baseline_handle(_: &routefinder::Captures<'_, '_>, _: &mut Discard) {}

fn baseline_handle_write(captures: &routefinder::Captures<'_, '_>, response: &mut Discard) {
    response.write_body(captures.get("name").unwrap_or_default().as_bytes());
}

/// routefinder has no notion of methods, so it gets one router per method
/// and the same 404 / 405 treatment trieroute gives itself
struct Baseline {
    routers: BTreeMap<Method, routefinder::Router<BaselineFunc>>,
}

impl Baseline {
    fn load(routes: &[(Method, &str)], handler: BaselineFunc) -> Self {
        let mut routers = BTreeMap::new();
        for (method, pattern) in routes {
            routers
                .entry(*method)
                .or_insert_with(routefinder::Router::new)
                .add(colon_syntax(pattern).as_str(), handler)
                .unwrap();
        }
        Self { routers }
    }

    fn serve(&self, method: Method, path: &str, response: &mut Discard) {
        if let Some(m) = self
            .routers
            .get(&method)
            .and_then(|router| router.best_match(path))
        {
            return (m.handler())(&m.captures(), response);
        }

        let allowed = self
            .routers
            .iter()
            .any(|(other, router)| *other != method && router.best_match(path).is_some());
        response.set_status(if allowed {
            StatusCode::METHOD_NOT_ALLOWED
        } else {
            StatusCode::NOT_FOUND
        });
    }
}

/// `/user/{name}/*rest` as routefinder spells it: `/user/:name/*`
fn colon_syntax(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|section| {
            if let Some(name) = section.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                format!(":{name}")
            } else if section.starts_with('*') {
                "*".to_string()
            } else {
                section.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join("/")
}

/// a concrete request path for `pattern`: every param matches its own name
fn request_path(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|section| {
            if let Some(name) = section.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                name
            } else if section.starts_with('*') {
                "a/b/c"
            } else {
                section
            }
        })
        .collect::<Vec<&str>>()
        .join("/")
}

fn single(c: &mut Criterion, name: &str, pattern: &str, path: &str, write: bool) {
    let routes = [(Method::Get, pattern)];
    let (handler, baseline_handler): (HandlerFunc, BaselineFunc) = if write {
        (handle_write, baseline_handle_write)
    } else {
        (handle, baseline_handle)
    };

    let router = calc_mem(&format!("trieroute {name}"), || {
        load_trieroute(&routes, handler)
    });
    let baseline = calc_mem(&format!("routefinder {name}"), || {
        Baseline::load(&routes, baseline_handler)
    });

    let service = router.handler();
    let mut check = Discard::new();
    assert_eq!(
        service.serve(&http::Method::GET, path, &mut check),
        Outcome::Handled
    );

    report_allocs(&format!("trieroute {name}"), || {
        service.serve(&http::Method::GET, path, &mut Discard::new());
    });
    report_allocs(&format!("routefinder {name}"), || {
        baseline.serve(Method::Get, path, &mut Discard::new());
    });

    let mut group = c.benchmark_group(name);
    group.bench_function("trieroute", |b| {
        let mut response = Discard::new();
        b.iter(|| service.serve(&http::Method::GET, black_box(path), &mut response))
    });
    group.bench_function("routefinder", |b| {
        let mut response = Discard::new();
        b.iter(|| baseline.serve(Method::Get, black_box(path), &mut response))
    });
    group.finish();
}

fn param(c: &mut Criterion) {
    single(c, "param", "/user/{name}", "/user/gordon", false);
}

fn param5(c: &mut Criterion) {
    single(
        c,
        "param5",
        "/{a}/{b}/{c}/{d}/{e}",
        "/test/test/test/test/test",
        false,
    );
}

fn param20(c: &mut Criterion) {
    single(
        c,
        "param20",
        "/{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{i}/{j}/{k}/{l}/{m}/{n}/{o}/{p}/{q}/{r}/{s}/{t}",
        "/a/b/c/d/e/f/g/h/i/j/k/l/m/n/o/p/q/r/s/t",
        false,
    );
}

fn param_write(c: &mut Criterion) {
    single(c, "param_write", "/user/{name}", "/user/gordon", true);
}

const API: &[(Method, &str)] = &[
    (Method::Get, "/authorizations"),
    (Method::Get, "/authorizations/{id}"),
    (Method::Post, "/authorizations"),
    (Method::Delete, "/authorizations/{id}"),
    (Method::Get, "/applications/{client_id}/tokens/{access_token}"),
    (Method::Delete, "/applications/{client_id}/tokens"),
    (Method::Get, "/events"),
    (Method::Get, "/repos/{owner}/{repo}/events"),
    (Method::Get, "/networks/{owner}/{repo}/events"),
    (Method::Get, "/orgs/{org}/events"),
    (Method::Get, "/users/{user}/received_events"),
    (Method::Get, "/users/{user}/received_events/public"),
    (Method::Get, "/users/{user}/events"),
    (Method::Get, "/users/{user}/events/public"),
    (Method::Get, "/users/{user}/events/orgs/{org}"),
    (Method::Get, "/feeds"),
    (Method::Get, "/notifications"),
    (Method::Put, "/notifications"),
    (Method::Get, "/repos/{owner}/{repo}/notifications"),
    (Method::Get, "/notifications/threads/{id}"),
    (Method::Patch, "/notifications/threads/{id}"),
    (Method::Get, "/user/starred/{owner}/{repo}"),
    (Method::Put, "/user/starred/{owner}/{repo}"),
    (Method::Delete, "/user/starred/{owner}/{repo}"),
    (Method::Get, "/gists/{id}/star"),
    (Method::Get, "/repos/{owner}/{repo}/contents/*path"),
    (Method::Get, "/static/*path"),
];

fn routes(c: &mut Criterion) {
    let router = calc_mem("trieroute api", || load_trieroute(API, handle));
    let baseline = calc_mem("routefinder api", || Baseline::load(API, baseline_handle));

    let requests: Vec<(Method, http::Method, String)> = API
        .iter()
        .map(|(method, pattern)| (*method, (*method).into(), request_path(pattern)))
        .collect();

    let service = router.handler();
    for (_, method, path) in &requests {
        let mut check = Discard::new();
        assert_eq!(service.serve(method, path, &mut check), Outcome::Handled);
    }

    let mut group = c.benchmark_group("api");
    group.bench_function("trieroute", |b| {
        let mut response = Discard::new();
        b.iter(|| {
            for (_, method, path) in &requests {
                service.serve(method, black_box(path), &mut response);
            }
        })
    });
    group.bench_function("routefinder", |b| {
        let mut response = Discard::new();
        b.iter(|| {
            for (method, _, path) in &requests {
                baseline.serve(*method, black_box(path), &mut response);
            }
        })
    });
    group.finish();
}

criterion_group!(benches, param, param5, param20, param_write, routes);
criterion_main!(benches);
