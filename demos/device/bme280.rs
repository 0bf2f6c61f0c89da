use std::thread;
use std::time::Duration;

use homie::{Datatype, Device, DeviceState};
use log::LevelFilter;

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .init();

    let mut device = Device::new("raspberry-pi", "Raspberry PI agent").unwrap();
    device.on_set(|topic: &str, value: &str, _datatype: Datatype| {
        // stand-in for an MQTT client publish
        println!("publish {topic} = {value}");
    });

    let node = device.add_node("bme280", "BME280 on GPIO", "bme280").unwrap();
    node.add_property("temperature", "Temperature", Datatype::Float)
        .unwrap()
        .set_unit("°C");
    node.add_property("pressure", "Pressure", Datatype::Float)
        .unwrap()
        .set_unit("hPa");
    node.add_property("humidity", "Humidity", Datatype::Float)
        .unwrap()
        .set_unit("%");

    // the full definition only needs to be sent once, unless the
    // topology changes over time
    for attribute in device.homie_attributes() {
        println!("publish {} = {}", attribute.topic, attribute.value);
    }

    device.set_state(DeviceState::Ready);

    for i in 0..3 {
        let node = device.node_mut("bme280").unwrap();
        node.property_mut("temperature").unwrap().set(20.5 + f64::from(i));
        node.property_mut("pressure").unwrap().set(1013.25);
        node.property_mut("humidity").unwrap().set(54.2);
        thread::sleep(Duration::from_secs(1));
    }

    device.set_state(DeviceState::Disconnected);
}
