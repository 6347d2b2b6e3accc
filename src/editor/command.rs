use super::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResetTarget {
    All,
    Point,
    Triangle,
    Camera,
}

/// One console input, the text counterpart of a GUI control.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    Vertex(Component, Point3),
    VertexAxis(Component, Axis, f64),
    Drag(Point3),
    PointAxis(Axis, f64),
    Coordinate(Component, f64),
    Inside(bool),
    ToggleInside,
    Mode(BalancingMode),
    Camera(Point3),
    Reset(ResetTarget),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
vertex <a|b|c> <x> <y> <z>      Move a vertex
vertex-axis <a|b|c> <x|y|z> <v> Set one coordinate of a vertex
drag <x> <y> <z>                Drag the point along the camera ray
point-axis <x|y|z> <v>          Set one coordinate of the point
coord <alpha|beta|gamma> <v>    Set one barycentric coordinate
inside <on|off>                 Keep the point within the triangle
toggle-inside                   Toggle the constraint above
mode <evenly|ratio|none>        Balancing mode for coordinate edits
camera <x> <y> <z>              Move the camera
reset [all|point|triangle|camera]
show
help
quit";

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            bail!("Empty command");
        };
        let args: Vec<&str> = tokens.collect();
        let command = match keyword.to_ascii_lowercase().as_str() {
            "vertex" => {
                expect_args(keyword, &args, 4)?;
                Self::Vertex(parse_component(args[0])?, parse_point(&args[1..])?)
            }
            "vertex-axis" => {
                expect_args(keyword, &args, 3)?;
                Self::VertexAxis(
                    parse_component(args[0])?,
                    parse_axis(args[1])?,
                    parse_value(args[2])?,
                )
            }
            "drag" => {
                expect_args(keyword, &args, 3)?;
                Self::Drag(parse_point(&args)?)
            }
            "point-axis" => {
                expect_args(keyword, &args, 2)?;
                Self::PointAxis(parse_axis(args[0])?, parse_value(args[1])?)
            }
            "coord" => {
                expect_args(keyword, &args, 2)?;
                Self::Coordinate(parse_component(args[0])?, parse_value(args[1])?)
            }
            "inside" => {
                expect_args(keyword, &args, 1)?;
                Self::Inside(parse_switch(args[0])?)
            }
            "toggle-inside" => {
                expect_args(keyword, &args, 0)?;
                Self::ToggleInside
            }
            "mode" => {
                expect_args(keyword, &args, 1)?;
                let mode = BalancingMode::from_name(args[0])
                    .ok_or_else(|| anyhow!("Unknown balancing mode: {}", args[0]))?;
                Self::Mode(mode)
            }
            "camera" => {
                expect_args(keyword, &args, 3)?;
                Self::Camera(parse_point(&args)?)
            }
            "reset" => {
                ensure!(args.len() <= 1, "reset takes at most one argument");
                let target = match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
                    None | Some("all") => ResetTarget::All,
                    Some("point") => ResetTarget::Point,
                    Some("triangle") => ResetTarget::Triangle,
                    Some("camera") => ResetTarget::Camera,
                    Some(other) => bail!("Unknown reset target: {other}"),
                };
                Self::Reset(target)
            }
            "show" => Self::Show,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => bail!("Unknown command: {keyword}"),
        };
        Ok(command)
    }
}

fn expect_args(keyword: &str, args: &[&str], count: usize) -> Result<()> {
    ensure!(
        args.len() == count,
        "{keyword} expects {count} arguments, got {}",
        args.len()
    );
    Ok(())
}

fn parse_value(token: &str) -> Result<f64> {
    let value: f64 = token
        .parse()
        .with_context(|| format!("Invalid number: {token}"))?;
    ensure!(value.is_finite(), "Non-finite number: {token}");
    Ok(value)
}

fn parse_point(tokens: &[&str]) -> Result<Point3> {
    Ok(point![
        parse_value(tokens[0])?,
        parse_value(tokens[1])?,
        parse_value(tokens[2])?
    ])
}

fn parse_component(token: &str) -> Result<Component> {
    Component::from_name(token).ok_or_else(|| anyhow!("Unknown component: {token}"))
}

fn parse_axis(token: &str) -> Result<Axis> {
    Axis::from_name(token).ok_or_else(|| anyhow!("Unknown axis: {token}"))
}

fn parse_switch(token: &str) -> Result<bool> {
    match token.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => bail!("Expected on or off, got {token}"),
    }
}
