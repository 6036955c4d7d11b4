//! Three-day Paris itinerary.
//!
//! Day order and themes must stay aligned with the per-day narrative the
//! PDF export prints for this trip.

use roteiro_core::{PointOfInterest, Restaurant};

use super::{Sight, Table};
use crate::registry::{CuratedDay, CuratedItinerary, DestinationSignature};

pub(crate) const NAME: &str = "paris-3-days";

const LANDMARKS: &[&str] = &[
    "Torre Eiffel",
    "Eiffel Tower",
    "Museu do Louvre",
    "Louvre",
    "Catedral de Notre-Dame",
    "Notre-Dame",
];

pub(crate) fn itinerary() -> CuratedItinerary {
    CuratedItinerary::new(
        NAME,
        DestinationSignature::landmarks(LANDMARKS).with_day_count(3),
        days,
    )
}

fn days() -> Vec<CuratedDay> {
    vec![
        CuratedDay {
            theme: "Ícones de Paris".to_owned(),
            morning: [eiffel_tower(), louvre()],
            lunch: cafe_de_flore(),
            afternoon: [tuileries(), arc_de_triomphe()],
            dinner: jules_verne(),
        },
        CuratedDay {
            theme: "Île de la Cité e Margem Esquerda".to_owned(),
            morning: [notre_dame(), sainte_chapelle()],
            lunch: le_procope(),
            afternoon: [musee_d_orsay(), luxembourg()],
            dinner: bouillon_chartier(),
        },
        CuratedDay {
            theme: "Montmartre e a Paris dos Artistas".to_owned(),
            morning: [sacre_coeur(), place_du_tertre()],
            lunch: maison_rose(),
            afternoon: [musee_rodin(), palais_garnier()],
            dinner: le_train_bleu(),
        },
    ]
}

fn eiffel_tower() -> PointOfInterest {
    Sight {
        name: "Torre Eiffel",
        kind: "Monumento",
        address: "Champ de Mars, 5 Av. Anatole France, 75007 Paris",
        position: (48.8584, 2.2945),
        rating: 4.7,
        description: "Torre de ferro de 330 metros com mirantes sobre toda a cidade.",
        image: "/images/paris/torre-eiffel.jpg",
    }
    .build()
    .with_opening_hours("09:30-23:45")
    .with_ticket_price("€29,40")
}

fn louvre() -> PointOfInterest {
    Sight {
        name: "Museu do Louvre",
        kind: "Museu",
        address: "Rue de Rivoli, 75001 Paris",
        position: (48.8606, 2.3376),
        rating: 4.7,
        description: "O maior museu de arte do mundo, casa da Mona Lisa.",
        image: "/images/paris/louvre.jpg",
    }
    .build()
    .with_opening_hours("09:00-18:00")
    .with_ticket_price("€22")
}

fn tuileries() -> PointOfInterest {
    Sight {
        name: "Jardim das Tulherias",
        kind: "Parque",
        address: "Place de la Concorde, 75001 Paris",
        position: (48.8635, 2.3275),
        rating: 4.6,
        description: "Jardim à francesa entre o Louvre e a Place de la Concorde.",
        image: "/images/paris/tulherias.jpg",
    }
    .build()
}

fn arc_de_triomphe() -> PointOfInterest {
    Sight {
        name: "Arco do Triunfo",
        kind: "Monumento",
        address: "Place Charles de Gaulle, 75008 Paris",
        position: (48.8738, 2.2950),
        rating: 4.7,
        description: "Arco monumental no topo da Champs-Élysées.",
        image: "/images/paris/arco-do-triunfo.jpg",
    }
    .build()
    .with_ticket_price("€16")
}

fn notre_dame() -> PointOfInterest {
    Sight {
        name: "Catedral de Notre-Dame",
        kind: "Igreja",
        address: "6 Parvis Notre-Dame - Pl. Jean-Paul II, 75004 Paris",
        position: (48.8530, 2.3499),
        rating: 4.7,
        description: "Catedral gótica na Île de la Cité, reaberta após a restauração.",
        image: "/images/paris/notre-dame.jpg",
    }
    .build()
}

fn sainte_chapelle() -> PointOfInterest {
    Sight {
        name: "Sainte-Chapelle",
        kind: "Igreja",
        address: "10 Bd du Palais, 75001 Paris",
        position: (48.8554, 2.3450),
        rating: 4.7,
        description: "Capela real famosa pelos vitrais do século XIII.",
        image: "/images/paris/sainte-chapelle.jpg",
    }
    .build()
    .with_ticket_price("€13")
}

fn musee_d_orsay() -> PointOfInterest {
    Sight {
        name: "Museu d'Orsay",
        kind: "Museu",
        address: "1 Rue de la Légion d'Honneur, 75007 Paris",
        position: (48.8600, 2.3266),
        rating: 4.8,
        description: "Antiga estação ferroviária com a maior coleção impressionista.",
        image: "/images/paris/orsay.jpg",
    }
    .build()
    .with_ticket_price("€16")
}

fn luxembourg() -> PointOfInterest {
    Sight {
        name: "Jardim de Luxemburgo",
        kind: "Parque",
        address: "75006 Paris",
        position: (48.8462, 2.3372),
        rating: 4.7,
        description: "Jardim do Senado com fontes, estátuas e barquinhos.",
        image: "/images/paris/luxemburgo.jpg",
    }
    .build()
}

fn sacre_coeur() -> PointOfInterest {
    Sight {
        name: "Basílica de Sacré-Cœur",
        kind: "Igreja",
        address: "35 Rue du Chevalier de la Barre, 75018 Paris",
        position: (48.8867, 2.3431),
        rating: 4.8,
        description: "Basílica branca no alto de Montmartre.",
        image: "/images/paris/sacre-coeur.jpg",
    }
    .build()
}

fn place_du_tertre() -> PointOfInterest {
    Sight {
        name: "Place du Tertre",
        kind: "Praça",
        address: "Place du Tertre, 75018 Paris",
        position: (48.8865, 2.3408),
        rating: 4.4,
        description: "Praça dos pintores de rua de Montmartre.",
        image: "/images/paris/place-du-tertre.jpg",
    }
    .build()
}

fn musee_rodin() -> PointOfInterest {
    Sight {
        name: "Museu Rodin",
        kind: "Museu",
        address: "77 Rue de Varenne, 75007 Paris",
        position: (48.8553, 2.3159),
        rating: 4.6,
        description: "Esculturas de Rodin num palacete com jardim.",
        image: "/images/paris/rodin.jpg",
    }
    .build()
    .with_ticket_price("€14")
}

fn palais_garnier() -> PointOfInterest {
    Sight {
        name: "Palácio Garnier",
        kind: "Teatro",
        address: "Place de l'Opéra, 75009 Paris",
        position: (48.8720, 2.3316),
        rating: 4.8,
        description: "Ópera do Segundo Império com grande escadaria de mármore.",
        image: "/images/paris/garnier.jpg",
    }
    .build()
    .with_ticket_price("€15")
}

fn cafe_de_flore() -> Restaurant {
    Table {
        name: "Café de Flore",
        cuisine: "Francesa",
        price_level: "€€€",
        rating: 4.1,
        address: "172 Bd Saint-Germain, 75006 Paris",
        position: (48.8542, 2.3326),
        image: "/images/paris/cafe-de-flore.jpg",
    }
    .build()
}

fn jules_verne() -> Restaurant {
    Table {
        name: "Le Jules Verne",
        cuisine: "Francesa contemporânea",
        price_level: "€€€€",
        rating: 4.5,
        address: "Torre Eiffel, 2º andar, Av. Gustave Eiffel, 75007 Paris",
        position: (48.8582, 2.2946),
        image: "/images/paris/jules-verne.jpg",
    }
    .build()
}

fn le_procope() -> Restaurant {
    Table {
        name: "Le Procope",
        cuisine: "Francesa tradicional",
        price_level: "€€€",
        rating: 4.2,
        address: "13 Rue de l'Ancienne Comédie, 75006 Paris",
        position: (48.8530, 2.3389),
        image: "/images/paris/le-procope.jpg",
    }
    .build()
}

fn bouillon_chartier() -> Restaurant {
    Table {
        name: "Bouillon Chartier",
        cuisine: "Francesa",
        price_level: "€",
        rating: 4.3,
        address: "7 Rue du Faubourg Montmartre, 75009 Paris",
        position: (48.8719, 2.3430),
        image: "/images/paris/bouillon-chartier.jpg",
    }
    .build()
}

fn maison_rose() -> Restaurant {
    Table {
        name: "La Maison Rose",
        cuisine: "Francesa",
        price_level: "€€",
        rating: 4.0,
        address: "2 Rue de l'Abreuvoir, 75018 Paris",
        position: (48.8874, 2.3394),
        image: "/images/paris/maison-rose.jpg",
    }
    .build()
}

fn le_train_bleu() -> Restaurant {
    Table {
        name: "Le Train Bleu",
        cuisine: "Francesa clássica",
        price_level: "€€€€",
        rating: 4.4,
        address: "Place Louis-Armand, Gare de Lyon, 75012 Paris",
        position: (48.8448, 2.3735),
        image: "/images/paris/train-bleu.jpg",
    }
    .build()
}
