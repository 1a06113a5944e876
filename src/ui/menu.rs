//! Interactive menu loop
//!
//! The numbered menu the tool presents when started without a
//! subcommand. Every rejected operation prints a negative
//! acknowledgment and the loop continues; only Save & Exit leaves.

use anyhow::Result;
use dialoguer::{Input, Select};

use crate::domain::entities::{Device, DeviceRegistry, DeviceStatus};
use crate::domain::value_objects::is_valid_ipv4;
use crate::ui::table;

pub fn run(registry: &mut DeviceRegistry) -> Result<()> {
    println!("devmon - network device inventory");
    println!("---------------------------------");

    let items = [
        "[1] Add New Device",
        "[2] Update Device Status",
        "[3] Search for a Device",
        "[4] Sort Devices",
        "[5] Remove a Device",
        "[6] View All Devices",
        "[7] Generate Report",
        "[8] Save & Exit",
    ];

    loop {
        println!();
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => add_device(registry)?,
            1 => update_status(registry)?,
            2 => search(registry)?,
            3 => sort(registry)?,
            4 => remove(registry)?,
            5 => println!("{}", table::render(registry.devices())),
            6 => println!("{}", table::render_report(&registry.status_counts())),
            _ => {
                registry.save();
                println!("Inventory saved. Goodbye.");
                return Ok(());
            }
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn add_device(registry: &mut DeviceRegistry) -> Result<()> {
    let id = prompt("Device ID")?;
    if registry.find_by_id(&id).is_some() {
        println!("Error: a device with that ID already exists.");
        return Ok(());
    }

    let name = prompt("Device name")?;
    let ip = prompt("Device IP address")?;
    if !is_valid_ipv4(&ip) {
        println!("Error: invalid IPv4 address.");
        return Ok(());
    }

    if registry.add(Device::new(id, name, ip)) {
        println!("Device added successfully.");
    } else {
        println!("Failed to add device. Check inputs.");
    }
    Ok(())
}

fn update_status(registry: &mut DeviceRegistry) -> Result<()> {
    let id = prompt("Device ID")?;
    let Some(device) = registry.find_by_id(&id) else {
        println!("Device not found.");
        return Ok(());
    };
    println!("Current status: {}", device.status);

    let input = prompt("New status (Online, Offline, Maintenance)")?;
    let Ok(status) = input.parse::<DeviceStatus>() else {
        println!("Invalid status.");
        return Ok(());
    };

    if registry.update_status(&id, status) {
        println!("Status updated.");
    } else {
        println!("Failed to update status.");
    }
    Ok(())
}

fn search(registry: &DeviceRegistry) -> Result<()> {
    let query = prompt("Device ID or name")?;
    let matches = registry.search(&query);
    if matches.is_empty() {
        println!("No matching devices found.");
    } else {
        println!("{}", table::render_refs(&matches));
    }
    Ok(())
}

fn sort(registry: &mut DeviceRegistry) -> Result<()> {
    let criterion = prompt("Sort by 'name' or 'status'")?;
    if !registry.sort_by(&criterion) {
        println!("Invalid sort criterion. Use name or status.");
        return Ok(());
    }

    registry.save();
    println!("Devices sorted.");
    println!("{}", table::render(registry.devices()));
    Ok(())
}

fn remove(registry: &mut DeviceRegistry) -> Result<()> {
    let id = prompt("Device ID to remove")?;
    if registry.remove(&id) {
        println!("Device removed.");
    } else {
        println!("Device not found.");
    }
    Ok(())
}
