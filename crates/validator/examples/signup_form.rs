//! Validating a sign-up form with fieldcheck
//!
//! Stage failures are logged at TRACE through `tracing-subscriber`.

use fieldcheck::prelude::*;
use fieldcheck::rules;

struct SignupForm<'a> {
    first_name: &'a str,
    email: &'a str,
    age: &'a str,
    street: &'a str,
    city: &'a str,
    postal_code: &'a str,
    student_number: &'a str,
}

#[derive(Debug)]
#[allow(dead_code)]
struct Signup {
    first_name: String,
    email: String,
    age: i32,
    street: String,
    city: String,
    postal_code: String,
    student_number: String,
}

fn validate(form: &SignupForm<'_>) -> Result<Signup, ValidationError> {
    Ok(Signup {
        first_name: rules::chars_required(form.first_name, "First name", LengthBounds::at_most(40))?
            .to_owned(),
        email: rules::email_required(form.email, LengthBounds::at_most(254))?.to_owned(),
        age: rules::integer_required(form.age, "Age")?,
        street: rules::street_address_required(form.street)?.to_owned(),
        city: rules::city_name_required(form.city, LengthBounds::between(2, 60))?.to_owned(),
        postal_code: rules::postal_code_required(form.postal_code)?.into_owned(),
        student_number: rules::numeric_required_exact_integer(
            form.student_number,
            "Student number",
            6,
        )?,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let forms = [
        SignupForm {
            first_name: "Ada",
            email: "ada@example.com",
            age: "36",
            street: "12-B Rue Saint-Denis",
            city: "Montr\u{e9}al",
            postal_code: "h2x 1k4",
            student_number: "004217",
        },
        SignupForm {
            first_name: "Ada",
            email: "ada@example.com",
            age: "thirty-six",
            street: "12-B Rue Saint-Denis",
            city: "Montr\u{e9}al",
            postal_code: "h2x 1k4",
            student_number: "004217",
        },
        SignupForm {
            first_name: "Ada",
            email: "ada@example.com",
            age: "36",
            street: "12-B Rue Saint-Denis",
            city: "Montr\u{e9}al",
            postal_code: "",
            student_number: "004217",
        },
    ];

    for form in &forms {
        match validate(form) {
            Ok(signup) => println!("✓ accepted: {signup:?}"),
            Err(err) => println!("✗ {err} ({})", err.to_json_value()),
        }
    }

    // Reusable pipelines for fields not covered by the catalog
    let username = Pipeline::new("Username")
        .required()
        .chars(CharClass::Alphanumeric)
        .bounds(LengthBounds::between(3, 16));
    for candidate in ["ada1815", "ad", "ada lovelace"] {
        match username.run(candidate) {
            Ok(name) => println!("✓ username {name}"),
            Err(err) => println!("✗ {err}"),
        }
    }
}
