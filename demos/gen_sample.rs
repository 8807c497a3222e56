use anyhow::Result;

const HEADERS: [&str; 14] = [
    "Student ID",
    "Full Name",
    "Date of Birth",
    "Gender",
    "APAAR ID",
    "Category",
    "Address",
    "Admission Class",
    "Admission Date",
    "Blood Group",
    "Father Name",
    "Father Contact",
    "Mother Name",
    "Mother Contact",
];

fn main() -> Result<()> {
    let mut writer = csv::Writer::from_path("sample-student-template.csv")?;
    writer.write_record(HEADERS)?;
    writer.write_record([
        "STU001",
        "Aarav Sharma",
        "2012-04-15",
        "Male",
        "123456789012",
        "General",
        "12 MG Road, Pune",
        "6-A",
        "2023-06-01",
        "B+",
        "Rajesh Sharma",
        "9876543210",
        "Sunita Sharma",
        "9876501234",
    ])?;
    writer.write_record([
        "STU002",
        "Diya Patel",
        "2011-11-02",
        "Female",
        "210987654321",
        "OBC",
        "Flat 4, Lake View Apartments, Ahmedabad",
        "7-B",
        "2022-06-03",
        "O+",
        "Mehul Patel",
        "9812345678",
        "Kavita Patel",
        "9823456789",
    ])?;
    writer.flush()?;
    println!("Wrote sample-student-template.csv");
    Ok(())
}
