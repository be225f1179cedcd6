use crate::types::{Locale, ReasonCode};

/// Scripted alternative offered to a blocked client. Fixed strings keyed by
/// reason code and locale. The gate treats them as opaque; swapping in a
/// different localization layer does not touch the evaluator.
pub fn message_for(reason: ReasonCode, locale: Locale) -> &'static str {
    match (locale, reason) {
        (Locale::En, ReasonCode::ColorRequested) => {
            "This artist works exclusively in black and grey. We can route your \
             idea to another artist on the team, or explore a blackwork version \
             of the design — reply to this message and we'll set it up."
        }
        (Locale::En, ReasonCode::CoverupNotOffered) => {
            "This artist doesn't take cover-up projects. Send us a photo of the \
             existing tattoo and we'll match you with an artist who specializes \
             in cover-ups."
        }
        (Locale::En, ReasonCode::TouchupNotOffered) => {
            "This artist doesn't take touch-ups on work from other studios. If \
             the original piece was done here, reply with your booking details \
             and we'll look it up."
        }
        (Locale::En, ReasonCode::ReworkNotOffered) => {
            "This artist doesn't rework existing tattoos. We can recommend an \
             artist on the team who takes rework projects — just reply to this \
             message."
        }
        (Locale::En, ReasonCode::RepeatNotOffered) => {
            "This artist doesn't repeat previous designs — every piece is one of \
             a kind. They'd be happy to design something original in a similar \
             style for you."
        }
        (Locale::En, ReasonCode::AgeVerificationRequired) => {
            "We can only tattoo clients who are 18 or older, with valid ID. \
             We'd love to see you when you're of age."
        }
        (Locale::Es, ReasonCode::ColorRequested) => {
            "Este artista trabaja exclusivamente en negro y gris. Podemos pasar \
             tu idea a otro artista del equipo, o explorar una versión en \
             blackwork del diseño — responde a este mensaje y lo organizamos."
        }
        (Locale::Es, ReasonCode::CoverupNotOffered) => {
            "Este artista no acepta proyectos de cobertura. Envíanos una foto \
             del tatuaje existente y te pondremos con un artista especializado \
             en coberturas."
        }
        (Locale::Es, ReasonCode::TouchupNotOffered) => {
            "Este artista no retoca trabajos de otros estudios. Si la pieza \
             original se hizo aquí, responde con los datos de tu reserva y lo \
             buscamos."
        }
        (Locale::Es, ReasonCode::ReworkNotOffered) => {
            "Este artista no rehace tatuajes existentes. Podemos recomendarte \
             un artista del equipo que acepte este tipo de proyectos — solo \
             responde a este mensaje."
        }
        (Locale::Es, ReasonCode::RepeatNotOffered) => {
            "Este artista no repite diseños anteriores — cada pieza es única. \
             Con gusto diseñará algo original en un estilo similar para ti."
        }
        (Locale::Es, ReasonCode::AgeVerificationRequired) => {
            "Solo podemos tatuar a clientes mayores de 18 años con documento \
             válido. Nos encantará verte cuando tengas la edad."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_REASONS: [ReasonCode; 6] = [
        ReasonCode::ColorRequested,
        ReasonCode::CoverupNotOffered,
        ReasonCode::TouchupNotOffered,
        ReasonCode::ReworkNotOffered,
        ReasonCode::RepeatNotOffered,
        ReasonCode::AgeVerificationRequired,
    ];

    #[test]
    fn every_reason_has_both_locales() {
        for reason in ALL_REASONS {
            assert!(!message_for(reason, Locale::En).is_empty());
            assert!(!message_for(reason, Locale::Es).is_empty());
        }
    }

    #[test]
    fn locales_differ() {
        for reason in ALL_REASONS {
            assert_ne!(
                message_for(reason, Locale::En),
                message_for(reason, Locale::Es)
            );
        }
    }
}
