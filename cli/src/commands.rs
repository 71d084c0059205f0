// Command implementations: open objects, decode, print tables
use anyhow::{Context, Result, anyhow, bail};
use comfy_table::{Cell, ContentArrangement, Row as TableRow, Table, presets::UTF8_FULL};
use humansize::{DECIMAL, format_size};
use wobbegong::{
    DataFrame, DecodeOptions, LocalFiles, Loaded, Missing, Row, RowOptions, Selector,
    SummarizedExperiment, TypedArray,
};

fn selector(arg: &str) -> Selector<'_> {
    match arg.parse::<usize>() {
        Ok(i) => Selector::Index(i),
        Err(_) => Selector::Name(arg),
    }
}

fn open<'a>(path: &str, files: &'a LocalFiles) -> Result<Loaded<'a, LocalFiles>> {
    wobbegong::load(path, files).with_context(|| format!("Failed to open '{}'", path))
}

fn open_experiment<'a>(path: &str, files: &'a LocalFiles) -> Result<SummarizedExperiment<'a, LocalFiles>> {
    match open(path, files)? {
        Loaded::SummarizedExperiment(se) => Ok(se),
        Loaded::DataFrame(_) => bail!("'{}' holds a data frame, not a summarized experiment", path),
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn print_values(values: &TypedArray, limit: Option<usize>) {
    let shown = limit.unwrap_or(values.len()).min(values.len());
    for i in 0..shown {
        if let Some(v) = values.display_value(i) {
            println!("{}", v);
        }
    }
    if shown < values.len() {
        println!("... ({} more)", values.len() - shown);
    }
}

fn print_data_frame(df: &DataFrame<'_, LocalFiles>) {
    println!("Rows: {}", df.number_of_rows());
    println!("Row names: {}", if df.has_row_names() { "yes" } else { "no" });
    println!("Content: {}", format_size(df.content_bytes(), DECIMAL));

    let mut table = new_table(vec!["#", "Column", "Type"]);
    for (i, info) in df.column_names_with_types().iter().enumerate() {
        table.add_row(TableRow::from(vec![
            Cell::new(i),
            Cell::new(&info.name),
            Cell::new(&info.dtype),
        ]));
    }
    println!("{}", table);
}

fn print_experiment(se: &SummarizedExperiment<'_, LocalFiles>) -> Result<()> {
    println!("Dimensions: {} x {}", se.number_of_rows(), se.number_of_columns());

    let mut table = new_table(vec!["#", "Assay", "Type", "Format", "Statistics", "Content"]);
    for (i, name) in se.assay_names().iter().enumerate() {
        let assay = se.assay(i)?;
        let format = if assay.is_sparse() { "sparse" } else { "dense" };
        table.add_row(TableRow::from(vec![
            Cell::new(i),
            Cell::new(name),
            Cell::new(assay.type_tag()),
            Cell::new(format),
            Cell::new(assay.statistic_names().join(", ")),
            Cell::new(format_size(assay.content_bytes(), DECIMAL)),
        ]));
    }
    println!("{}", table);

    if let Some(names) = se.reduced_dimension_names() {
        let mut table = new_table(vec!["#", "Reduced dimension", "Type", "Columns", "Content"]);
        for (i, name) in names.iter().enumerate() {
            if let Some(rd) = se.reduced_dimension(i)? {
                table.add_row(TableRow::from(vec![
                    Cell::new(i),
                    Cell::new(name),
                    Cell::new(rd.type_tag()),
                    Cell::new(rd.number_of_columns()),
                    Cell::new(format_size(rd.content_bytes(), DECIMAL)),
                ]));
            }
        }
        println!("{}", table);
    }

    if let Some(row_data) = se.row_data()? {
        println!("--- Row data ---");
        print_data_frame(&row_data);
    }
    if let Some(column_data) = se.column_data()? {
        println!("--- Column data ---");
        print_data_frame(&column_data);
    }
    Ok(())
}

pub fn print_info(path: &str) -> Result<()> {
    let files = LocalFiles::new();
    println!("Path: {}", path);
    match open(path, &files)? {
        Loaded::DataFrame(df) => {
            println!("Object: data_frame");
            print_data_frame(&df);
        }
        Loaded::SummarizedExperiment(se) => {
            println!("Object: {}", se.summary().object);
            print_experiment(&se)?;
        }
    }
    Ok(())
}

pub fn print_column(path: &str, column: &str, missing: Missing, limit: Option<usize>) -> Result<()> {
    let files = LocalFiles::new();
    let df = match open(path, &files)? {
        Loaded::DataFrame(df) => df,
        Loaded::SummarizedExperiment(se) => se
            .column_data()?
            .ok_or_else(|| anyhow!("'{}' has no column data", path))?,
    };
    let values = df
        .column(selector(column), &DecodeOptions::new(missing))
        .with_context(|| format!("Failed to read column '{}'", column))?;
    print_values(&values, limit);
    Ok(())
}

pub fn print_row(path: &str, assay: &str, row: usize, dense: bool, missing: Missing) -> Result<()> {
    let files = LocalFiles::new();
    let se = open_experiment(path, &files)?;
    let matrix = se.assay(selector(assay))?;
    let options = RowOptions {
        missing,
        as_dense: dense,
    };

    match matrix.row(row, &options)? {
        Row::Dense(values) => print_values(&values, None),
        Row::Sparse(sparse) => {
            let mut table = new_table(vec!["Column", "Value"]);
            for (k, index) in sparse.indices.iter().enumerate() {
                let value = sparse.values.display_value(k).unwrap_or_default();
                table.add_row(TableRow::from(vec![Cell::new(index), Cell::new(value)]));
            }
            println!("{}", table);
            println!("{} of {} columns non-zero", sparse.len(), matrix.number_of_columns());
        }
    }
    Ok(())
}

pub fn print_statistic(path: &str, assay: &str, statistic: &str) -> Result<()> {
    let files = LocalFiles::new();
    let se = open_experiment(path, &files)?;
    let matrix = se.assay(selector(assay))?;
    let values = matrix.statistic(statistic, &DecodeOptions::default())?;
    print_values(&values, None);
    Ok(())
}

pub fn print_reduced_dim(path: &str, name: &str, column: usize) -> Result<()> {
    let files = LocalFiles::new();
    let se = open_experiment(path, &files)?;
    let rd = se
        .reduced_dimension(selector(name))?
        .ok_or_else(|| anyhow!("'{}' has no reduced dimensions", path))?;
    let values = rd.column(column, &DecodeOptions::default())?;
    print_values(&values, None);
    Ok(())
}
