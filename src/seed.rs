//! Fixed demonstration dataset written on first-ever initialization.

use crate::types::{format_timestamp, Announcement, AnnouncementId};
use chrono::{Duration, NaiveDateTime};

/// The five demonstration records, timestamped relative to `now` so a fresh
/// install renders a chronologically staggered list.
pub(crate) fn demo_announcements(now: NaiveDateTime) -> Vec<Announcement> {
    let record = |id: &str, title: &str, description: &str, author: &str, age: Duration| {
        Announcement {
            id: AnnouncementId::from(id),
            title: title.to_string(),
            description: description.to_string(),
            author: author.to_string(),
            created_at: format_timestamp(now - age),
        }
    };

    vec![
        record(
            "1",
            "Manutenção na Rede de Água",
            "Informamos que haverá interrupção no fornecimento de água na Rua dos Lírios \
             entre 8h e 14h neste sábado devido a obras de manutenção.",
            "Maria Silva",
            Duration::hours(24),
        ),
        record(
            "2",
            "Feira de Artesanato",
            "Neste domingo, das 9h às 17h, teremos uma feira de artesanato na praça central. \
             Venha prestigiar os artistas locais!",
            "João Mendes",
            Duration::hours(12),
        ),
        record(
            "3",
            "Cuidado! Rua Alagada",
            "A Rua das Palmeiras está alagada devido às fortes chuvas. \
             Procure rotas alternativas.",
            "Pedro Alves",
            Duration::zero(),
        ),
        record(
            "4",
            "Coleta de Lixo Reciclável",
            "A coleta de lixo reciclável passará na quinta-feira nesta semana, em vez de \
             terça-feira. Por favor, coloque os materiais na calçada até 7h da manhã.",
            "Departamento de Limpeza Urbana",
            Duration::hours(36),
        ),
        record(
            "5",
            "Vacinação de Animais",
            "Neste sábado haverá vacinação gratuita para cães e gatos no Centro Comunitário, \
             das 9h às 16h. Traga seu animal com coleira e guia.",
            "Vigilância Sanitária",
            Duration::hours(48),
        ),
    ]
}
