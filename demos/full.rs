//! A more fully-fledged example, showcasing the other methods on [`MedianTracker`]

use medianheap::MedianTracker;

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
const DATA: [i64; 10] = [5, -3, 12, 0, 7, -3, 99, 1, 4, -20];

fn main() {
    let mut tracker = MedianTracker::new();

    // Before anything is inserted, there is no median to report
    match tracker.median() {
        Ok(median) => println!("Median: {median}"),
        Err(e) => println!("No median yet: {e}"),
    }

    // Read data points from our data source
    // `update` inserts the point and hands back the new median in one call
    for data_point in DATA {
        let median = tracker
            .update(data_point)
            .expect("tracker is non-empty after an insertion");

        println!(
            "Inserted {data_point}, median of {} elements is now {median}",
            tracker.len()
        );
    }

    // The final median is also available as a plain read, as many times as we like
    let median = tracker.median().expect("at least one element was inserted");
    println!("Final median: {median}");
}
