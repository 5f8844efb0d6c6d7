//! Encodes and decodes a small nested "drone telemetry" message: an enum
//! status field, a nested position message, an array of int16 deltas, a
//! boolean, an array of enum-valued propeller messages, and an array of
//! signed pressure readings. Prints the encoded byte length and the
//! decoded value as JSON.

use anyhow::{ensure, Result};
use bitwire::descriptor::{ArrayDescriptor, EnumDescriptor, FieldDescriptor, MessageDescriptor, TypeDescriptor};

static STATUS: EnumDescriptor = EnumDescriptor {
    extensible: false,
    uint_nbits: 3,
};

static POSITION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { name: "lat", offset: 0, ty: TypeDescriptor::Int { nbits: 32 } },
    FieldDescriptor { name: "lon", offset: 4, ty: TypeDescriptor::Int { nbits: 32 } },
    FieldDescriptor { name: "alt", offset: 8, ty: TypeDescriptor::Int { nbits: 32 } },
];
static POSITION: MessageDescriptor = MessageDescriptor {
    extensible: false,
    nbits: 96,
    fields: POSITION_FIELDS,
};

static FLIGHT_FIELDS: &[FieldDescriptor] = &[FieldDescriptor {
    name: "acceleration",
    offset: 0,
    ty: TypeDescriptor::Array(&ArrayDescriptor {
        extensible: false,
        cap: 3,
        element: TypeDescriptor::Int { nbits: 16 },
    }),
}];
static FLIGHT: MessageDescriptor = MessageDescriptor {
    extensible: false,
    nbits: 48,
    fields: FLIGHT_FIELDS,
};

static POWER_FIELDS: &[FieldDescriptor] = &[FieldDescriptor {
    name: "is_charging",
    offset: 0,
    ty: TypeDescriptor::Bool,
}];
static POWER: MessageDescriptor = MessageDescriptor {
    extensible: false,
    nbits: 1,
    fields: POWER_FIELDS,
};

static PROPELLER_DIRECTION: EnumDescriptor = EnumDescriptor {
    extensible: false,
    uint_nbits: 2,
};
static PROPELLER_FIELDS: &[FieldDescriptor] = &[FieldDescriptor {
    name: "direction",
    offset: 0,
    ty: TypeDescriptor::Enum(&PROPELLER_DIRECTION),
}];
static PROPELLER: MessageDescriptor = MessageDescriptor {
    extensible: false,
    nbits: 2,
    fields: PROPELLER_FIELDS,
};

static PRESSURE_SENSOR_FIELDS: &[FieldDescriptor] = &[FieldDescriptor {
    name: "pressures",
    offset: 0,
    ty: TypeDescriptor::Array(&ArrayDescriptor {
        extensible: false,
        cap: 4,
        element: TypeDescriptor::Int { nbits: 8 },
    }),
}];
static PRESSURE_SENSOR: MessageDescriptor = MessageDescriptor {
    extensible: false,
    nbits: 32,
    fields: PRESSURE_SENSOR_FIELDS,
};

static DRONE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { name: "status", offset: 0, ty: TypeDescriptor::Enum(&STATUS) },
    FieldDescriptor { name: "position", offset: 1, ty: TypeDescriptor::Message(&POSITION) },
    FieldDescriptor { name: "flight", offset: 13, ty: TypeDescriptor::Message(&FLIGHT) },
    FieldDescriptor { name: "power", offset: 19, ty: TypeDescriptor::Message(&POWER) },
    FieldDescriptor {
        name: "propellers",
        offset: 20,
        ty: TypeDescriptor::Array(&ArrayDescriptor {
            extensible: false,
            cap: 4,
            element: TypeDescriptor::Message(&PROPELLER),
        }),
    },
    FieldDescriptor { name: "pressure_sensor", offset: 24, ty: TypeDescriptor::Message(&PRESSURE_SENSOR) },
];
static DRONE: MessageDescriptor = MessageDescriptor {
    extensible: false,
    nbits: 3 + 96 + 48 + 1 + 4 * 2 + 32,
    fields: DRONE_FIELDS,
};

fn main() -> Result<()> {
    let mut value = vec![0u8; DRONE.host_size()];
    value[0] = 2; // status = RISING
    value[1..5].copy_from_slice(&2000i32.to_le_bytes()); // position.lat
    value[5..9].copy_from_slice(&2000i32.to_le_bytes()); // position.lon
    value[9..13].copy_from_slice(&1080i32.to_le_bytes()); // position.alt
    value[13..15].copy_from_slice(&(-1001i16).to_le_bytes()); // flight.acceleration[0]
    value[19] = 0; // power.is_charging = false
    value[20] = 1; // propellers[0].direction
    value[24] = (-11i8) as u8; // pressure_sensor.pressures[0]

    let mut buf = vec![0u8; DRONE.bytes_length()];
    bitwire::encode(&DRONE, &value, &mut buf);
    println!("encoded {} bytes", buf.len());

    let mut decoded = vec![0u8; DRONE.host_size()];
    bitwire::decode(&DRONE, &buf, &mut decoded);

    ensure!(decoded[0] == 2, "status did not round-trip");
    ensure!(i32::from_le_bytes(decoded[1..5].try_into()?) == 2000, "lat did not round-trip");
    ensure!(i16::from_le_bytes(decoded[13..15].try_into()?) == -1001, "acceleration[0] did not round-trip");
    ensure!(decoded[24] as i8 == -11, "pressures[0] did not round-trip");

    println!("{}", bitwire::to_json(&DRONE, &decoded));
    Ok(())
}
