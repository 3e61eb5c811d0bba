//! Plain-text system record format.
//!
//! One parenthesized record per body, one record per line:
//!
//! ```text
//! ( NAME Earth MASS 5.97219e24 RADIUS 6371000 TEMP 255 ANGLE 0 ANGVEL 0.0000727 POS 1.5e11 0 VEL 0 29780 ACC 0 0 HEATSRC 0 )
//! ```
//!
//! Tokens are whitespace-delimited and never escaped, so names must not
//! contain whitespace. Numbers are written in Rust's shortest round-trip form
//! and read back bit-exactly.

use nalgebra::Vector2;

use crate::body::Body;
use crate::builder::{check_storable_name, validate_body};
use crate::error::{RecordError, ValidationError};

fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-5..1e16).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Serializes bodies to the record format, in order.
///
/// # Errors
///
/// Fails with [`ValidationError::InvalidName`] when a name could not be read
/// back or used as a directory name.
pub fn write_records(bodies: &[Body]) -> Result<String, RecordError> {
    let mut out = String::new();
    for body in bodies {
        check_storable_name(&body.name)?;

        out.push_str(&format!(
            "( NAME {} MASS {} RADIUS {} TEMP {} ANGLE {} ANGVEL {} POS {} {} VEL {} {} ACC {} {} HEATSRC {} )\n",
            body.name,
            format_number(body.mass),
            format_number(body.radius),
            format_number(body.temperature),
            format_number(body.angle),
            format_number(body.angular_velocity),
            format_number(body.position.x),
            format_number(body.position.y),
            format_number(body.velocity.x),
            format_number(body.velocity.y),
            format_number(body.acceleration.x),
            format_number(body.acceleration.y),
            u8::from(body.is_heat_source),
        ));
    }
    Ok(out)
}

/// Fields collected while reading one record
#[derive(Default)]
struct PartialRecord {
    name: Option<String>,
    mass: Option<f64>,
    radius: Option<f64>,
    temperature: Option<f64>,
    angle: Option<f64>,
    angular_velocity: Option<f64>,
    position: Option<Vector2<f64>>,
    velocity: Option<Vector2<f64>>,
    acceleration: Option<Vector2<f64>>,
    is_heat_source: Option<bool>,
}

fn set<T>(slot: &mut Option<T>, field: &'static str, value: T) -> Result<(), RecordError> {
    if slot.is_some() {
        return Err(RecordError::DuplicateField(field));
    }
    *slot = Some(value);
    Ok(())
}

fn required<T>(slot: Option<T>, field: &'static str) -> Result<T, RecordError> {
    slot.ok_or(RecordError::Validation(ValidationError::MissingField(field)))
}

impl PartialRecord {
    fn into_body(self) -> Result<Body, RecordError> {
        Ok(Body {
            name: required(self.name, "NAME")?,
            mass: required(self.mass, "MASS")?,
            radius: required(self.radius, "RADIUS")?,
            temperature: required(self.temperature, "TEMP")?,
            angle: required(self.angle, "ANGLE")?,
            angular_velocity: required(self.angular_velocity, "ANGVEL")?,
            position: required(self.position, "POS")?,
            velocity: required(self.velocity, "VEL")?,
            acceleration: required(self.acceleration, "ACC")?,
            is_heat_source: required(self.is_heat_source, "HEATSRC")?,
        })
    }
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next_value(&mut self) -> Result<&'a str, RecordError> {
        match self.inner.next() {
            Some(")") | None => Err(RecordError::Unterminated),
            Some(token) => Ok(token),
        }
    }

    fn number(&mut self, field: &'static str) -> Result<f64, RecordError> {
        let token = self.next_value()?;
        token.parse().map_err(|_| RecordError::InvalidValue {
            field,
            token: token.to_string(),
        })
    }

    fn vector(&mut self, field: &'static str) -> Result<Vector2<f64>, RecordError> {
        let x = self.number(field)?;
        let y = self.number(field)?;
        Ok(Vector2::new(x, y))
    }

    fn flag(&mut self, field: &'static str) -> Result<bool, RecordError> {
        match self.next_value()? {
            "0" => Ok(false),
            "1" => Ok(true),
            token => Err(RecordError::InvalidValue {
                field,
                token: token.to_string(),
            }),
        }
    }
}

/// Parses a record stream back into bodies.
///
/// Keys inside a record may appear in any order but each exactly once. Every
/// parsed body is validated against the ones before it, so duplicate names
/// are rejected here as well.
///
/// # Examples
///
/// ```
/// use nbody::record::parse_records;
///
/// let bodies = parse_records(
///     "( NAME Sun MASS 1.989e30 RADIUS 6.9634e8 TEMP 5772 ANGLE 0 ANGVEL 0 \
///      POS 0 0 VEL 0 0 ACC 0 0 HEATSRC 1 )",
/// )
/// .unwrap();
/// assert_eq!(bodies[0].name, "Sun");
/// assert!(bodies[0].is_heat_source);
/// ```
pub fn parse_records(input: &str) -> Result<Vec<Body>, RecordError> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
    };
    let mut bodies: Vec<Body> = Vec::new();

    while let Some(open) = tokens.inner.next() {
        if open != "(" {
            return Err(RecordError::UnexpectedToken {
                expected: "`(`",
                found: open.to_string(),
            });
        }

        let mut record = PartialRecord::default();
        loop {
            let key = tokens.inner.next().ok_or(RecordError::Unterminated)?;
            match key {
                ")" => break,
                "NAME" => set(&mut record.name, "NAME", tokens.next_value()?.to_string())?,
                "MASS" => set(&mut record.mass, "MASS", tokens.number("MASS")?)?,
                "RADIUS" => set(&mut record.radius, "RADIUS", tokens.number("RADIUS")?)?,
                "TEMP" => set(&mut record.temperature, "TEMP", tokens.number("TEMP")?)?,
                "ANGLE" => set(&mut record.angle, "ANGLE", tokens.number("ANGLE")?)?,
                "ANGVEL" => set(
                    &mut record.angular_velocity,
                    "ANGVEL",
                    tokens.number("ANGVEL")?,
                )?,
                "POS" => set(&mut record.position, "POS", tokens.vector("POS")?)?,
                "VEL" => set(&mut record.velocity, "VEL", tokens.vector("VEL")?)?,
                "ACC" => set(&mut record.acceleration, "ACC", tokens.vector("ACC")?)?,
                "HEATSRC" => set(
                    &mut record.is_heat_source,
                    "HEATSRC",
                    tokens.flag("HEATSRC")?,
                )?,
                other => {
                    return Err(RecordError::UnexpectedToken {
                        expected: "a record key",
                        found: other.to_string(),
                    })
                }
            }
        }

        let body = record.into_body()?;
        validate_body(&bodies, &body)?;
        bodies.push(body);
    }

    Ok(bodies)
}
