//! Contact form submission.

use quitanda_storefront::contact::ContactForm;
use quitanda_storefront::error::Result;

/// Validate and submit the contact form.
///
/// There is no delivery backend; a valid submission is acknowledged
/// with the confirmation message. Validation failures mutate nothing
/// and surface as the command's error.
pub fn submit(name: &str, email: &str, message: &str) -> Result<()> {
    let form = ContactForm {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    };

    let email = form.validate()?;
    tracing::info!(email = %email, "Contact message accepted");
    println!("{}", ContactForm::confirmation());
    Ok(())
}
