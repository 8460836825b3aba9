// Default message tables

use crate::{MessageCatalog, MessageTable};

/// Build the default catalog: `en` and `fr`, one template per built-in
/// rule, aligned one-to-one across both locales.
pub(crate) fn catalog() -> MessageCatalog {
    let mut en = MessageTable::new();
    en.add("required", "The field \"{0}\" is mandatory.");
    en.add("numbers", "The field \"{0}\" must be a valid number.");
    en.add("email", "The field \"{0}\" must be a valid email address.");
    en.add("date", "The field \"{0}\" must be a valid date ({1}).");
    en.add("minlength", "The field \"{0}\" length must be greater than {1}.");
    en.add("maxlength", "The field \"{0}\" length must be lower than {1}.");
    en.add("equalPassword", "Passwords are different.");
    en.add("hasNumber", "The field \"{0}\" must contain a number.");
    en.add("hasUpperCase", "The field \"{0}\" must contain an upper case character.");
    en.add("hasLowerCase", "The field \"{0}\" must contain a lower case character.");
    en.add("hasSpecialCharacter", "The field \"{0}\" must contain a special character.");

    let mut fr = MessageTable::new();
    fr.add("required", "Le champ \"{0}\" est obligatoire.");
    fr.add("numbers", "Le champ \"{0}\" doit être un nombre valide.");
    fr.add("email", "Le champ \"{0}\" doit être une adresse email valide.");
    fr.add("date", "Le champ \"{0}\" doit être une date valide ({1}).");
    fr.add("minlength", "La longueur du champ \"{0}\" doit être supérieure à {1}.");
    fr.add("maxlength", "La longueur du champ \"{0}\" doit être inférieure à {1}.");
    fr.add("equalPassword", "Les mots de passe sont différents.");
    fr.add("hasNumber", "Le champ \"{0}\" doit contenir un chiffre.");
    fr.add("hasUpperCase", "Le champ \"{0}\" doit contenir une majuscule.");
    fr.add("hasLowerCase", "Le champ \"{0}\" doit contenir une minuscule.");
    fr.add("hasSpecialCharacter", "Le champ \"{0}\" doit contenir un caractère spécial.");

    let mut catalog = MessageCatalog::new();
    catalog.add_table("en", en);
    catalog.add_table("fr", fr);
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locales() {
        let catalog = catalog();
        assert!(catalog.table("en").is_some());
        assert!(catalog.table("fr").is_some());
        assert!(catalog.table("de").is_none());
    }

    #[test]
    fn test_templates_resolve() {
        let catalog = catalog();
        assert_eq!(
            catalog.template("fr", "required").unwrap(),
            "Le champ \"{0}\" est obligatoire."
        );
    }
}
