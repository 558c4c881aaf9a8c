use trieroute::{
    handler_fn, Handler, Lookup, Method, Request, ResponseWriter, RouteError, Router,
};

fn text(response: &mut dyn ResponseWriter, body: String) {
    response.write_body(body.as_bytes());
}

pub fn main() -> Result<(), RouteError> {
    env_logger::init();

    let mut router: Router<Box<dyn Handler>> = Router::new();

    router.get(
        "/*rest",
        Box::new(handler_fn(|request: &Request<'_, '_>, response: &mut dyn ResponseWriter| {
            text(
                response,
                format!(
                    "/{} did not have an explicit match",
                    request.captures().wildcard().unwrap_or_default()
                ),
            )
        })),
    )?;

    router.get(
        "/hello/{planet}",
        Box::new(handler_fn(|request: &Request<'_, '_>, response: &mut dyn ResponseWriter| {
            text(
                response,
                format!("hello, {}", request.param("planet").unwrap_or_default()),
            )
        })),
    )?;

    router.get(
        "/hello/earth",
        Box::new(handler_fn(|_: &Request<'_, '_>, response: &mut dyn ResponseWriter| {
            text(
                response,
                "hello! this is your home planet so it gets a dedicated route".into(),
            )
        })),
    )?;

    router.post(
        "/nested/*rest",
        Box::new(handler_fn(|request: &Request<'_, '_>, response: &mut dyn ResponseWriter| {
            text(
                response,
                format!("wildcard: {}", request.captures().wildcard().unwrap_or_default()),
            )
        })),
    )?;

    println!("router: {router:#?}");

    let mut args = std::env::args().skip(1);
    let (method, path) = match (args.next(), args.next()) {
        (Some(method), Some(path)) => (method, path),
        (Some(path), None) => ("GET".into(), path),
        _ => ("GET".into(), "/".into()),
    };
    let method: Method = method.parse()?;

    match router.lookup(method, &path) {
        Lookup::Found(m) => println!(
            "\n\ninput: {method} {path}\nbest match: {}\ncaptures: {:?}",
            m.route(),
            m.captures()
        ),
        Lookup::MethodNotAllowed(allowed) => {
            println!("\n\ninput: {method} {path}\nmethod not allowed, allow: {allowed}")
        }
        Lookup::NotFound => println!("\n\ninput: {method} {path}\nnot found"),
    }

    let mut response = http::Response::new(Vec::new());
    router
        .handler()
        .serve(&method.into(), &path, &mut response);
    println!(
        "status: {}\noutput: {}\n\n",
        response.status(),
        String::from_utf8_lossy(response.body())
    );

    println!(
        "methods with a route for {path}: {}",
        router.allowed_methods(&path)
    );

    Ok(())
}
