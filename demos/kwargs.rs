use sovran_kwargs::conditions::{InRange, Positive};
use sovran_kwargs::{kwargs, Keyword, ParamError, ParameterSet};
use tracing_subscriber::EnvFilter;

static WIDTH: Keyword<usize> = Keyword::new("width", 40);
static FILL: Keyword<char> = Keyword::new("fill", '-');
static TITLE: Keyword<String> = Keyword::new("title", String::new());
static OPACITY: Keyword<f64> = Keyword::new("opacity", 1.0);

fn banner(params: ParameterSet) -> Result<String, ParamError> {
    // Refuse calls that bind a keyword twice
    params.check()?;

    let width = params.get(&WIDTH);
    let fill = params.get(&FILL);
    let title = &params[&TITLE];

    let padding = width.saturating_sub(title.len()) / 2;
    let side: String = std::iter::repeat(fill).take(padding).collect();
    Ok(format!("{}{}{} (opacity {})", side, title, side, params.get(&OPACITY)))
}

fn main() -> Result<(), ParamError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    // Everything defaulted
    println!("{}", banner(ParameterSet::new())?);

    // A few keywords
    println!(
        "{}",
        banner(kwargs([TITLE.bind(" kwargs ".to_string()), FILL.bind('=')]))?
    );

    // Chained bindings, with checks on the values
    let params = WIDTH
        .bind(20)
        .require::<usize, _>(Positive)
        .and(OPACITY.bind(2.0).require(InRange::new(0.0, 1.0)));
    if let Err(e) = params.try_get(&OPACITY) {
        println!("Falling back to the default opacity: {}", e);
    }
    println!("{}", banner(params)?);

    // Binding a keyword twice is reported
    match banner(kwargs([WIDTH.bind(10), WIDTH.bind(12)])) {
        Ok(text) => println!("{}", text),
        Err(ParamError::Multiple { keywords }) => {
            println!("Bound more than once: {:?}", keywords)
        }
        Err(e) => println!("Other error: {}", e),
    }

    Ok(())
}
