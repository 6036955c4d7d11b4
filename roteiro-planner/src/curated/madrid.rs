//! Madrid fallback pools.
//!
//! Provider data for Madrid is often a handful of entries. When a small
//! pool is recognisably Madrid, these lists replace it so multi-day trips
//! do not cycle through the same few sights.

use geo::{Coord, Rect};
use roteiro_core::{PointOfInterest, Restaurant};

use super::{Sight, Table};
use crate::registry::{DestinationSignature, PoolOverride};

pub(crate) const NAME: &str = "madrid";

/// Pools with at least this many POIs are left alone.
const MIN_SELF_SUFFICIENT_POOL: usize = 8;

const LANDMARKS: &[&str] = &[
    "Museo del Prado",
    "Museu do Prado",
    "Palacio Real",
    "Palacio Real de Madrid",
    "Palácio Real de Madrid",
    "Parque del Retiro",
    "Parque do Retiro",
    "Plaza Mayor",
    "Puerta del Sol",
];

pub(crate) fn pool_override() -> PoolOverride {
    let city = Rect::new(Coord { x: -3.80, y: 40.35 }, Coord { x: -3.60, y: 40.50 });
    PoolOverride::new(
        NAME,
        DestinationSignature::landmarks(LANDMARKS)
            .with_max_pool_size(MIN_SELF_SUFFICIENT_POOL)
            .with_area(city),
        pois,
        restaurants,
    )
}

fn pois() -> Vec<PointOfInterest> {
    [
        Sight {
            name: "Museo del Prado",
            kind: "Museu",
            address: "C. de Ruiz de Alarcón, 23, 28014 Madrid",
            position: (40.4138, -3.6921),
            rating: 4.8,
            description: "Pinacoteca com Velázquez, Goya e El Greco.",
            image: "/images/madrid/prado.jpg",
        },
        Sight {
            name: "Palacio Real de Madrid",
            kind: "Palácio",
            address: "C. de Bailén, s/n, 28071 Madrid",
            position: (40.4180, -3.7143),
            rating: 4.7,
            description: "Residência oficial da coroa espanhola, com mais de três mil salas.",
            image: "/images/madrid/palacio-real.jpg",
        },
        Sight {
            name: "Parque del Retiro",
            kind: "Parque",
            address: "Plaza de la Independencia, 7, 28001 Madrid",
            position: (40.4153, -3.6845),
            rating: 4.8,
            description: "Grande parque com lago, Palácio de Cristal e roseiral.",
            image: "/images/madrid/retiro.jpg",
        },
        Sight {
            name: "Plaza Mayor",
            kind: "Praça",
            address: "Pl. Mayor, 28012 Madrid",
            position: (40.4155, -3.7074),
            rating: 4.6,
            description: "Praça porticada do século XVII no coração da Madrid dos Áustrias.",
            image: "/images/madrid/plaza-mayor.jpg",
        },
        Sight {
            name: "Puerta del Sol",
            kind: "Praça",
            address: "Puerta del Sol, 28013 Madrid",
            position: (40.4169, -3.7035),
            rating: 4.5,
            description: "Quilômetro zero das estradas espanholas.",
            image: "/images/madrid/puerta-del-sol.jpg",
        },
        Sight {
            name: "Museo Reina Sofía",
            kind: "Museu",
            address: "C. de Sta. Isabel, 52, 28012 Madrid",
            position: (40.4086, -3.6944),
            rating: 4.6,
            description: "Arte moderna espanhola, incluindo Guernica de Picasso.",
            image: "/images/madrid/reina-sofia.jpg",
        },
        Sight {
            name: "Templo de Debod",
            kind: "Monumento",
            address: "C. de Ferraz, 1, 28008 Madrid",
            position: (40.4240, -3.7177),
            rating: 4.6,
            description: "Templo egípcio do século II a.C. com pôr do sol famoso.",
            image: "/images/madrid/debod.jpg",
        },
        Sight {
            name: "Gran Vía",
            kind: "Avenida",
            address: "Gran Vía, Madrid",
            position: (40.4200, -3.7058),
            rating: 4.6,
            description: "Avenida de teatros, lojas e fachadas do início do século XX.",
            image: "/images/madrid/gran-via.jpg",
        },
        Sight {
            name: "Estadio Santiago Bernabéu",
            kind: "Estádio",
            address: "Av. de Concha Espina, 1, 28036 Madrid",
            position: (40.4531, -3.6883),
            rating: 4.7,
            description: "Estádio do Real Madrid com tour pelo museu do clube.",
            image: "/images/madrid/bernabeu.jpg",
        },
        Sight {
            name: "Catedral de la Almudena",
            kind: "Igreja",
            address: "C. de Bailén, 10, 28013 Madrid",
            position: (40.4157, -3.7146),
            rating: 4.6,
            description: "Catedral neogótica em frente ao Palácio Real.",
            image: "/images/madrid/almudena.jpg",
        },
    ]
    .into_iter()
    .map(Sight::build)
    .collect()
}

fn restaurants() -> Vec<Restaurant> {
    [
        Table {
            name: "Sobrino de Botín",
            cuisine: "Espanhola tradicional",
            price_level: "€€€",
            rating: 4.5,
            address: "C. de Cuchilleros, 17, 28005 Madrid",
            position: (40.4140, -3.7081),
            image: "/images/madrid/botin.jpg",
        },
        Table {
            name: "Casa Lucio",
            cuisine: "Espanhola",
            price_level: "€€€",
            rating: 4.4,
            address: "C. Cava Baja, 35, 28005 Madrid",
            position: (40.4118, -3.7092),
            image: "/images/madrid/casa-lucio.jpg",
        },
        Table {
            name: "Mercado de San Miguel",
            cuisine: "Tapas",
            price_level: "€€",
            rating: 4.4,
            address: "Pl. de San Miguel, s/n, 28005 Madrid",
            position: (40.4154, -3.7089),
            image: "/images/madrid/san-miguel.jpg",
        },
        Table {
            name: "Chocolatería San Ginés",
            cuisine: "Café",
            price_level: "€",
            rating: 4.4,
            address: "Pasadizo de San Ginés, 5, 28013 Madrid",
            position: (40.4168, -3.7067),
            image: "/images/madrid/san-gines.jpg",
        },
        Table {
            name: "Casa Labra",
            cuisine: "Tapas",
            price_level: "€",
            rating: 4.5,
            address: "C. de Tetuán, 12, 28013 Madrid",
            position: (40.4178, -3.7043),
            image: "/images/madrid/casa-labra.jpg",
        },
        Table {
            name: "Lhardy",
            cuisine: "Espanhola clássica",
            price_level: "€€€€",
            rating: 4.3,
            address: "Carrera de S. Jerónimo, 8, 28014 Madrid",
            position: (40.4166, -3.7011),
            image: "/images/madrid/lhardy.jpg",
        },
    ]
    .into_iter()
    .map(Table::build)
    .collect()
}
